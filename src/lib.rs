//! # Lukoba
//!
//! Movie browsing web application: the navigation shell's header
//! controller, the catalogue models the pages render, and the server that
//! hosts the browser app and proxies The Movie Database.
//!
//! ## Modules
//!
//! - [`header`]: Header controller core (search sync, dismissible menu,
//!   active links). No browser dependency; also compiled into the UI.
//! - [`models`]: TMDB payload models
//! - [`api`]: HTTP server with Axum (feature `server`)
//! - [`config`]: TOML + environment configuration (feature `server`)
//! - [`tmdb`]: Upstream HTTP client (feature `server`)
//!
//! The browser app lives in the `lukoba-ui` crate and depends on this one
//! with `default-features = false`.

pub mod header;
pub mod models;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod tmdb;

// Re-export top-level types for convenience
pub use header::{
    DismissibleMenu, Location, MenuItem, NavConfig, NavigationTarget, Router, SearchSynchronizer,
};

pub use models::{ExploreKind, MediaDetails, MediaItem, Page};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError};
