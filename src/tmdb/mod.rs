//! The Movie Database upstream
//!
//! HTTP client used by the proxy routes to reach TMDB with the server-held
//! access token.

pub mod client;

pub use client::{TmdbClient, TmdbClientConfig, TmdbError, UpstreamResponse};
