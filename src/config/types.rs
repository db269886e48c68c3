use serde::{Deserialize, Serialize};

use crate::catalog::{SourceLocation, DEFAULT_SOURCE};

/// Default page/window title
pub const DEFAULT_TITLE: &str = "Classic Cars";

/// Viewer configuration, read from `showroom.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomConfig {
    /// Catalog location (URL or path)
    pub source: String,

    /// Title shown in the header and the exported page
    pub title: String,

    /// Fixed user-facing messages
    pub messages: Messages,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            messages: Messages::default(),
        }
    }
}

impl ShowroomConfig {
    pub fn source_location(&self) -> SourceLocation {
        SourceLocation::parse(&self.source)
    }
}

/// Static texts rendered in place of, or inside, cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Placeholder when a search matches nothing
    pub no_results: String,

    /// Placeholder when the catalog could not be loaded
    pub load_failed: String,

    /// Label of the per-card link
    pub link_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_results: "🔍 No cars found for the search term.".to_string(),
            load_failed: "Could not load the classic cars.".to_string(),
            link_label: "Learn more →".to_string(),
        }
    }
}
