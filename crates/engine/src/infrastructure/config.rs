//! Runtime configuration from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `RESTOLIST_DATA_DIR` | platform config dir (`~/.config/restolist` on Linux) |
//! | `RESTOLIST_STORAGE_FILE` | `storage.json` |
//! | `RESTOLIST_LISTS_KEY` | `restaurant_lists` |

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::infrastructure::ports::storage_keys;

pub const DEFAULT_STORAGE_FILE: &str = "storage.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },

    #[error("{name} must be a plain file name, got '{value}'")]
    NotAFileName { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the storage file.
    pub data_dir: PathBuf,
    /// Storage file name inside `data_dir`.
    pub storage_file: String,
    /// Key the list snapshot is stored under.
    pub lists_key: String,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = match lookup("RESTOLIST_DATA_DIR") {
            Some(dir) => PathBuf::from(non_empty("RESTOLIST_DATA_DIR", dir)?),
            None => default_data_dir(),
        };

        let storage_file = match lookup("RESTOLIST_STORAGE_FILE") {
            Some(file) => {
                let file = non_empty("RESTOLIST_STORAGE_FILE", file)?;
                if file.contains(['/', '\\']) {
                    return Err(ConfigError::NotAFileName {
                        name: "RESTOLIST_STORAGE_FILE",
                        value: file,
                    });
                }
                file
            }
            None => DEFAULT_STORAGE_FILE.to_string(),
        };

        let lists_key = match lookup("RESTOLIST_LISTS_KEY") {
            Some(key) => non_empty("RESTOLIST_LISTS_KEY", key)?,
            None => storage_keys::RESTAURANT_LISTS.to_string(),
        };

        Ok(Self {
            data_dir,
            storage_file,
            lists_key,
        })
    }

    /// Full path of the storage file.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage_file)
    }
}

fn non_empty(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ConfigError::Empty { name })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Platform config directory, or the working directory when there is none.
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("io", "restolist", "restolist")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
