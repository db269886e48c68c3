use async_trait::async_trait;

use super::{loaded_viewer, CommandHandler};
use crate::catalog::filter;
use crate::config::ShowroomConfig;
use crate::render::text::container_text;
use crate::{Result, ShowroomError};

/// Handler for the `search` command
pub struct SearchCommand {
    pub config: ShowroomConfig,
    pub query: Option<String>,
    pub json: bool,
}

#[async_trait]
impl CommandHandler for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let mut viewer = loaded_viewer(&self.config).await?;

        if !viewer.store().is_loaded() {
            return Err(ShowroomError::Load(container_text(viewer.surface())));
        }

        let query = self.query.as_deref().unwrap_or("");
        if self.json {
            let matches = filter(viewer.store().all(), query);
            println!("{}", serde_json::to_string_pretty(&matches)?);
        } else {
            viewer.on_search_triggered(query);
            println!("{}", container_text(viewer.surface()));
        }

        Ok(())
    }
}

impl SearchCommand {
    /// Create new search command
    pub fn new(config: ShowroomConfig, query: Option<String>, json: bool) -> Self {
        Self {
            config,
            query,
            json,
        }
    }
}
