//! Viewer configuration: catalog location, title and fixed messages

mod loader;
mod types;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use types::{Messages, ShowroomConfig, DEFAULT_TITLE};
