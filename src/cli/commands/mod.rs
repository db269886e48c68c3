#[cfg(feature = "tui")]
pub mod browse;
pub mod export;
pub mod search;

use async_trait::async_trait;
use std::path::Path;

use crate::catalog::{open_source, CatalogSource};
use crate::config::{ConfigLoader, ShowroomConfig};
use crate::render::Container;
use crate::viewer::{load_catalog, Viewer};
use crate::Result;

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler {
    /// Execute the command
    async fn execute(&self) -> Result<()>;
}

/// Resolve the effective configuration for a run.
///
/// `source` overrides whatever location the configuration file names.
pub fn resolve_config(config_path: Option<&Path>, source: Option<&str>) -> Result<ShowroomConfig> {
    let mut config = ConfigLoader::new().load(config_path)?;
    if let Some(source) = source {
        config.source = source.to_string();
    }
    Ok(config)
}

/// Build a viewer and run the startup load against the configured source
pub(crate) async fn loaded_viewer(config: &ShowroomConfig) -> Result<Viewer<Container>> {
    let source: Box<dyn CatalogSource> = open_source(&config.source_location())?;
    let mut viewer = Viewer::new(Container::new(), config.messages.clone());
    load_catalog(&mut viewer, source.as_ref()).await;
    Ok(viewer)
}
