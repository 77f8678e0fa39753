//! Project-level configuration support
//!
//! Loads per-project configuration from `geoscan.toml` or `.geoscanrc.json`
//! in the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # geoscan.toml
//!
//! [defaults]
//! format = "text"
//! workers = 4
//! no_emoji = false
//! fail_under = 60
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Preferred config file name
pub const CONFIG_FILE_NAME: &str = "geoscan.toml";

/// JSON alternative, tried when no TOML file exists
pub const JSON_CONFIG_FILE_NAME: &str = ".geoscanrc.json";

/// Written by `geoscan init`
pub const EXAMPLE_CONFIG: &str = r#"# geoscan configuration
#
# Values here are defaults; command-line flags always win.

[defaults]
# Output format: text | json | markdown
format = "text"

# Worker threads for batch analysis (1-64, omit to auto-detect)
# workers = 4

# Replace status icons with [OK] / [INFO] / [ALARM]
no_emoji = false

# Exit with code 1 when any report scores below this value (0-100)
# fail_under = 60
"#;

/// Errors raised while reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value in {}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Project-level configuration loaded from geoscan.toml or similar
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Default number of workers
    #[serde(default)]
    pub workers: Option<usize>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,

    /// Minimum acceptable GEO score
    #[serde(default)]
    pub fail_under: Option<u8>,
}

impl ProjectConfig {
    fn validate(self, path: &Path) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        };
        if let Some(workers) = self.defaults.workers {
            if !(1..=64).contains(&workers) {
                return Err(invalid(format!("workers must be 1-64, got {}", workers)));
            }
        }
        if let Some(fail_under) = self.defaults.fail_under {
            if fail_under > 100 {
                return Err(invalid(format!(
                    "fail_under must be 0-100, got {}",
                    fail_under
                )));
            }
        }
        Ok(self)
    }
}

/// Load project configuration from the given directory
///
/// Searches for config files in order:
/// 1. `geoscan.toml`
/// 2. `.geoscanrc.json`
///
/// A file that fails to load is logged and skipped. Returns default
/// configuration if nothing usable is found.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    for name in [CONFIG_FILE_NAME, JSON_CONFIG_FILE_NAME] {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
            }
        }
    }

    debug!("No project config found in {}", dir.display());
    ProjectConfig::default()
}

/// Load a specific config file, choosing the parser by extension
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: ProjectConfig = if is_json {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?
    };

    config.validate(path)
}
