use super::types::ShowroomConfig;
use crate::{Result, ShowroomError};
use std::path::{Path, PathBuf};

/// Name of the configuration file, both project-local and per-user
pub const CONFIG_FILE_NAME: &str = "showroom.yaml";

/// Configuration loader
///
/// Resolution order: explicit path, `./showroom.yaml`, the user config
/// directory, built-in defaults.
pub struct ConfigLoader {
    project_root: PathBuf,
    user_config: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader rooted at the current directory
    pub fn new() -> Self {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            project_root,
            user_config: Self::default_user_config_path(),
        }
    }

    /// Create a loader with explicit lookup locations
    pub fn with_locations(project_root: impl Into<PathBuf>, user_config: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            user_config,
        }
    }

    /// Get the per-user config file path
    pub fn default_user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "showroom")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolve and load the effective configuration
    pub fn load(&self, explicit: Option<&Path>) -> Result<ShowroomConfig> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ShowroomError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_path(path);
        }

        let project_config = self.project_root.join(CONFIG_FILE_NAME);
        if project_config.exists() {
            return Self::load_from_path(&project_config);
        }

        if let Some(user_config) = &self.user_config {
            if user_config.exists() {
                return Self::load_from_path(user_config);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(ShowroomConfig::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<ShowroomConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShowroomError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(ShowroomConfig::default());
        }

        let config: ShowroomConfig = serde_yaml_ng::from_str(&content).map_err(|e| {
            ShowroomError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })?;

        if config.source.trim().is_empty() {
            return Err(ShowroomError::Config(format!(
                "Config {} has an empty 'source'",
                path.display()
            )));
        }

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
