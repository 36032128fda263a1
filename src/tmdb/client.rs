//! TMDB REST API Client
//!
//! Thin HTTP client for The Movie Database. The proxy forwards responses
//! verbatim, so this client returns raw bodies instead of typed payloads.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Configuration for the TMDB client
#[derive(Debug, Clone)]
pub struct TmdbClientConfig {
    /// API root, e.g. "https://api.themoviedb.org/3"
    pub base_url: String,
    /// Bearer token; requests fail fast without one
    pub access_token: Option<String>,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Image CDN root advertised in place of TMDB's own
    pub image_base_url: Option<String>,
}

impl Default for TmdbClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            access_token: None,
            request_timeout_ms: 10_000,
            image_base_url: None,
        }
    }
}

/// Upstream response passed back to the browser
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// TMDB REST API client
pub struct TmdbClient {
    client: Client,
    config: TmdbClientConfig,
}

impl TmdbClient {
    /// Create a new client with the given configuration
    pub fn new(config: TmdbClientConfig) -> Result<Self, TmdbError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TmdbClientConfig {
        &self.config
    }

    /// Whether an access token is available
    pub fn is_configured(&self) -> bool {
        self.config
            .access_token
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }

    /// Full upstream URL for an API path and raw query string
    pub fn url_for(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// GET an API path, returning whatever the upstream answered
    pub async fn get(&self, path: &str, query: Option<&str>) -> Result<UpstreamResponse, TmdbError> {
        let token = self
            .config
            .access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(TmdbError::MissingToken)?;

        let url = self.url_for(path, query);
        tracing::debug!(%url, "TMDB request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(classify)?.to_vec();

        if status >= 400 {
            tracing::warn!(%url, status, "TMDB returned an error status");
        }

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }

    /// Check that the upstream answers and accepts the token
    pub async fn health_check(&self) -> Result<(), TmdbError> {
        let response = self.get("configuration", None).await?;
        if (200..300).contains(&response.status) {
            Ok(())
        } else {
            Err(TmdbError::Status(response.status))
        }
    }
}

fn classify(e: reqwest::Error) -> TmdbError {
    if e.is_timeout() {
        TmdbError::Timeout
    } else if e.is_connect() {
        TmdbError::Unavailable
    } else {
        TmdbError::Request(e)
    }
}

/// TMDB client errors
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("TMDB request timed out")]
    Timeout,

    #[error("TMDB is unavailable")]
    Unavailable,

    #[error("No TMDB access token configured")]
    MissingToken,

    #[error("TMDB returned status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> TmdbClient {
        TmdbClient::new(TmdbClientConfig {
            base_url: "https://api.example.org/3/".to_string(),
            access_token: token.map(str::to_string),
            request_timeout_ms: 1000,
            image_base_url: None,
        })
        .unwrap()
    }

    #[test]
    fn test_url_for() {
        let c = client(None);
        assert_eq!(
            c.url_for("/trending/all/week", Some("language=en-US")),
            "https://api.example.org/3/trending/all/week?language=en-US"
        );
        assert_eq!(c.url_for("configuration", Some("")), "https://api.example.org/3/configuration");
    }

    #[test]
    fn test_is_configured() {
        assert!(!client(None).is_configured());
        assert!(!client(Some("")).is_configured());
        assert!(client(Some("token")).is_configured());
    }

    #[tokio::test]
    async fn test_get_without_token_fails_fast() {
        let err = client(None).get("configuration", None).await.unwrap_err();
        assert!(matches!(err, TmdbError::MissingToken));
    }
}
