//! Data Transfer Objects
//!
//! Response types owned by the server itself. Proxied TMDB payloads pass
//! through untouched and have no DTOs here.

use serde::Serialize;

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "configured" or "missing_token"
    pub upstream: String,
    pub uptime_seconds: u64,
    pub version: String,
}
