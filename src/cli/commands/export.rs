use async_trait::async_trait;
use std::path::PathBuf;

use super::{loaded_viewer, CommandHandler};
use crate::config::ShowroomConfig;
use crate::render::html::page_html;
use crate::{Result, ShowroomError};

/// Handler for the `export` command
pub struct ExportCommand {
    pub config: ShowroomConfig,
    pub output: PathBuf,
    pub query: Option<String>,
    pub title: Option<String>,
}

#[async_trait]
impl CommandHandler for ExportCommand {
    async fn execute(&self) -> Result<()> {
        let mut viewer = loaded_viewer(&self.config).await?;

        // A failed load exports the failure page as-is
        if viewer.store().is_loaded() {
            if let Some(query) = &self.query {
                viewer.on_search_triggered(query);
            }
        } else {
            tracing::warn!("Catalog did not load; exporting the failure message");
        }

        let title = self.title.as_deref().unwrap_or(&self.config.title);
        let page = page_html(title, viewer.surface());

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ShowroomError::Path(format!(
                        "Failed to create output directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        std::fs::write(&self.output, page)?;

        println!(
            "Exported {} cards to {}",
            viewer.surface().cards().len(),
            self.output.display()
        );
        Ok(())
    }
}

impl ExportCommand {
    /// Create new export command
    pub fn new(
        config: ShowroomConfig,
        output: PathBuf,
        query: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            config,
            output,
            query,
            title,
        }
    }
}
