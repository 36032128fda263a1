//! HTTP API Client
//!
//! Functions for fetching movie data through the Lukoba server's TMDB proxy.

use gloo_net::http::Request;
use lukoba::models::{ApiConfiguration, ExploreKind, MediaDetails, MediaItem, Page};
use serde::de::DeserializeOwned;

/// Default API base URL (same origin as the app)
pub const DEFAULT_API_BASE: &str = "/api/tmdb";

const API_URL_KEY: &str = "lukoba_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error body returned by TMDB or by the proxy
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    status_message: Option<String>,
    #[serde(default)]
    error: Option<ProxyError>,
}

#[derive(Debug, serde::Deserialize)]
struct ProxyError {
    message: String,
}

impl ApiErrorBody {
    fn message(self) -> Option<String> {
        self.error.map(|e| e.message).or(self.status_message)
    }
}

/// Build `<base>/<path>?<params>` with every value percent-encoded
pub fn endpoint_url(base: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if !params.is_empty() {
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}

async fn get_json<T: DeserializeOwned>(path: &str, params: &[(&str, String)]) -> Result<T, String> {
    let url = endpoint_url(&get_api_base(), path, params);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::message)
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(format!("{} ({})", message, status));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ API Functions ============

/// Trending movies and shows of the week (home banner)
pub async fn fetch_trending() -> Result<Vec<MediaItem>, String> {
    let page: Page<MediaItem> = get_json(ExploreKind::Trending.endpoint(), &[]).await?;
    Ok(page.results)
}

/// Image CDN configuration
pub async fn fetch_configuration() -> Result<ApiConfiguration, String> {
    get_json("configuration", &[]).await
}

/// One page of a listing
pub async fn fetch_explore(kind: ExploreKind, page: u32) -> Result<Page<MediaItem>, String> {
    get_json(kind.endpoint(), &[("page", page.to_string())]).await
}

/// One page of movies in a genre
pub async fn fetch_genre(genre_id: u32, page: u32) -> Result<Page<MediaItem>, String> {
    get_json(
        "discover/movie",
        &[("with_genres", genre_id.to_string()), ("page", page.to_string())],
    )
    .await
}

/// Details of a movie or show
pub async fn fetch_details(media_type: &str, id: u64) -> Result<MediaDetails, String> {
    get_json(&format!("{}/{}", media_type, id), &[]).await
}

/// Multi search across movies and shows
pub async fn search(query: &str, page: u32) -> Result<Page<MediaItem>, String> {
    get_json(
        "search/multi",
        &[("query", query.to_string()), ("page", page.to_string())],
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_encodes_values() {
        assert_eq!(
            endpoint_url("/api/tmdb/", "search/multi", &[
                ("query", "the matrix".to_string()),
                ("page", "1".to_string()),
            ]),
            "/api/tmdb/search/multi?query=the%20matrix&page=1"
        );
    }

    #[test]
    fn test_endpoint_url_without_params() {
        assert_eq!(
            endpoint_url("/api/tmdb", "/configuration", &[]),
            "/api/tmdb/configuration"
        );
    }

    #[test]
    fn test_error_body_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": {"code": "UPSTREAM_TIMEOUT", "message": "timed out"}}"#)
                .unwrap();
        assert_eq!(body.message().as_deref(), Some("timed out"));

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"status_message": "Invalid API key"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("Invalid API key"));
    }
}
