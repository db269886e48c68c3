/// Interactive card browser implementation
pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;

use crate::catalog::open_source;
use crate::config::ShowroomConfig;
use crate::Result;

/// Entry point for the browser
pub async fn run(config: ShowroomConfig) -> Result<()> {
    let source = open_source(&config.source_location())?;
    let app = app::App::new(&config, source);
    app.run().await
}
