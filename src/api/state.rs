use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::StorageConfig;

/// Shared state for API handlers.
///
/// `submit_lock` serializes roster mutations: the rating engine has no
/// transaction discipline of its own, so the API applies one episode (or
/// roster change) at a time.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageConfig>,
    pub config: Arc<AppConfig>,
    pub submit_lock: Arc<tokio::sync::Mutex<()>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let storage = StorageConfig::new(config.data_dir.clone());
        Self {
            storage: Arc::new(storage),
            config: Arc::new(config),
            submit_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }
}
