//! Shared setup for end-to-end tests.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::infrastructure::config::AppConfig;
use crate::App;

/// A data directory that lives as long as the test.
pub struct TestEnv {
    _dir: TempDir,
    pub config: AppConfig,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let data_dir = dir.path().join("restolist");
        let config = AppConfig::from_lookup(|name| match name {
            "RESTOLIST_DATA_DIR" => Some(data_dir.display().to_string()),
            _ => None,
        })
        .expect("valid test config");
        Self { _dir: dir, config }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.config.storage_path()
    }

    /// Start the app the way the binary does, load included.
    pub async fn start(&self) -> App {
        let app = App::new(&self.config).await;
        app.store.load().await;
        app
    }
}
