//! TMDB Proxy Route
//!
//! - GET /api/tmdb/*path - forward to the movie database with the
//!   server-held bearer token
//!
//! The upstream status and body are returned as-is so the browser sees
//! exactly what TMDB answered. The one exception is a configured image
//! mirror, which replaces the image roots in `configuration`.

use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/tmdb/*path
pub async fn proxy(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult<Response> {
    validate_path(&path)?;

    let mut upstream = state.tmdb.get(&path, query.as_deref()).await?;

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if path == CONFIGURATION_PATH && status.is_success() {
        if let Some(image_base) = state.tmdb.config().image_base_url.as_deref() {
            match rewrite_image_base(&upstream.body, image_base) {
                Some(body) => upstream.body = body,
                None => tracing::warn!("Configuration response has no images section, left as-is"),
            }
        }
    }
    let content_type = upstream
        .content_type
        .unwrap_or_else(|| "application/json".to_string());

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(upstream.body))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

const CONFIGURATION_PATH: &str = "configuration";

/// Point both image roots of a `configuration` body at `image_base`.
/// `None` when the body is not a configuration object.
fn rewrite_image_base(body: &[u8], image_base: &str) -> Option<Vec<u8>> {
    let mut config: serde_json::Value = serde_json::from_slice(body).ok()?;
    let images = config.get_mut("images")?.as_object_mut()?;
    for key in ["base_url", "secure_base_url"] {
        images.insert(key.to_string(), serde_json::Value::from(image_base));
    }
    serde_json::to_vec(&config).ok()
}

/// Only plain API paths are forwarded: no traversal, no absolute URLs
fn validate_path(path: &str) -> ApiResult<()> {
    let valid = !path.is_empty()
        && path.split('/').all(|segment| {
            !segment.is_empty()
                && segment != ".."
                && segment != "."
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        });

    if valid {
        Ok(())
    } else {
        Err(ApiError::Validation(format!("Invalid API path: {}", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("trending/all/week").is_ok());
        assert!(validate_path("movie/603").is_ok());
        assert!(validate_path("search/multi").is_ok());

        assert!(validate_path("").is_err());
        assert!(validate_path("../secrets").is_err());
        assert!(validate_path("movie//603").is_err());
        assert!(validate_path("http:").is_err());
        assert!(validate_path("movie/603?x").is_err());
    }

    #[test]
    fn test_rewrite_image_base() {
        let body = br#"{"images": {"base_url": "http://image.tmdb.org/t/p/",
            "secure_base_url": "https://image.tmdb.org/t/p/", "poster_sizes": ["w500"]},
            "change_keys": []}"#;

        let rewritten = rewrite_image_base(body, "https://cdn.example.com/t/p/").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&rewritten).unwrap();

        assert_eq!(value["images"]["base_url"], "https://cdn.example.com/t/p/");
        assert_eq!(value["images"]["secure_base_url"], "https://cdn.example.com/t/p/");
        assert_eq!(value["images"]["poster_sizes"][0], "w500");
        assert!(value["change_keys"].is_array());
    }

    #[test]
    fn test_rewrite_image_base_needs_images() {
        assert!(rewrite_image_base(br#"{"status_message": "nope"}"#, "https://x/").is_none());
        assert!(rewrite_image_base(b"not json", "https://x/").is_none());
    }
}
