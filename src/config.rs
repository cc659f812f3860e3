//! Writing configuration persistence
//!
//! Stores user preferences in `~/.config/pseudo-vertical/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::text::LineDirection;

/// Preferences applied by the writing operators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingConfig {
    /// Column order for transposed text
    #[serde(default)]
    pub direction: LineDirection,

    /// Right-align objects entering vertical mode, left-align them on the way back
    #[serde(default = "default_align_on_convert")]
    pub align_on_convert: bool,

    /// UI locale override (e.g., "ja_JP"); the environment is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

fn default_align_on_convert() -> bool {
    true
}

impl Default for WritingConfig {
    fn default() -> Self {
        Self {
            direction: LineDirection::default(),
            align_on_convert: default_align_on_convert(),
            locale: None,
        }
    }
}

impl WritingConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn lines_rtl(&self) -> bool {
        self.direction.is_rtl()
    }
}
