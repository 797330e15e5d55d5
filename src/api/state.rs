//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::shops::ShopCatalog;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only shop dataset
    pub catalog: Arc<ShopCatalog>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: ShopCatalog, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn static_dir(&self) -> &Path {
        Path::new(&self.config.static_dir)
    }

    /// Entry document of the frontend bundle
    pub fn index_file(&self) -> PathBuf {
        self.static_dir().join("index.html")
    }

    /// Whether the frontend bundle has been built and is servable
    pub fn has_frontend(&self) -> bool {
        self.index_file().is_file()
    }
}
