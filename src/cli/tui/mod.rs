/// Terminal User Interface module for interactive commands
pub mod browse;

use crate::config::ShowroomConfig;
use crate::Result;

/// Run the interactive card browser
pub async fn run_browser(config: ShowroomConfig) -> Result<()> {
    browse::run(config).await
}
