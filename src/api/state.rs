//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::tmdb::TmdbClient;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream movie database client
    pub tmdb: Arc<TmdbClient>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(tmdb: TmdbClient, config: ServerConfig) -> Self {
        Self {
            tmdb: Arc::new(tmdb),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
