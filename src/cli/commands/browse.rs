use async_trait::async_trait;

use super::CommandHandler;
use crate::config::ShowroomConfig;
use crate::Result;

/// Handler for the `browse` command
pub struct BrowseCommand {
    pub config: ShowroomConfig,
}

#[async_trait]
impl CommandHandler for BrowseCommand {
    async fn execute(&self) -> Result<()> {
        crate::cli::tui::run_browser(self.config.clone()).await
    }
}

impl BrowseCommand {
    /// Create new browse command
    pub fn new(config: ShowroomConfig) -> Self {
        Self { config }
    }
}
