//! Export settings, read from a TOML file such as `webexport.toml`.
//!
//! ```toml
//! [export]
//! enforce_tag_format = true
//! disabled_tags = ["legacy-widget"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings applied when exporters are registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Reject tags that browsers would refuse as custom element names.
    pub enforce_tag_format: bool,
    /// Tags whose exporters are skipped during registration.
    pub disabled_tags: HashSet<String>,
}

/// On-disk layout: settings live under an `[export]` table.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    export: ExportConfig,
}

impl ExportConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.export)
    }

    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads settings from `path`.
    /// Falls back to defaults when the file is missing or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No export config found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded export config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("{}. Falling back to default export config.", e);
                Self::default()
            }
        }
    }

    pub fn is_tag_disabled(&self, tag: &str) -> bool {
        self.disabled_tags.contains(tag)
    }
}
