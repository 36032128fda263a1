//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means any
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory holding the built UI (index.html + wasm bundle)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "lukoba-ui/dist".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            static_dir: default_static_dir(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream movie database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
    #[serde(default = "default_tmdb_url")]
    pub base_url: String,

    /// API read access token sent as a bearer token
    #[serde(default)]
    pub access_token: Option<String>,

    /// Image CDN root handed to the browser instead of the one TMDB
    /// reports from `/configuration`
    #[serde(default)]
    pub image_base_url: Option<String>,
}

fn default_tmdb_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_tmdb_url(),
            access_token: None,
            image_base_url: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("lukoba").join("config.toml")),
            Some(PathBuf::from("./lukoba.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("LUKOBA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("LUKOBA_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = var("LUKOBA_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        // Upstream overrides
        if let Some(url) = var("LUKOBA_TMDB_URL") {
            self.tmdb.base_url = url;
        }
        // The Vite-era variable still works for existing deployments.
        if let Some(token) = var("LUKOBA_TMDB_TOKEN").or_else(|| var("VITE_REACT_APP_ACCESS_TOKEN")) {
            if !token.is_empty() {
                self.tmdb.access_token = Some(token);
            }
        }
        if let Some(url) = var("LUKOBA_TMDB_IMAGE_URL").filter(|u| !u.is_empty()) {
            self.tmdb.image_base_url = Some(url);
        }

        // Logging overrides
        if let Some(level) = var("LUKOBA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LUKOBA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Lukoba Configuration
#
# Environment variables override these settings:
# - LUKOBA_HOST
# - LUKOBA_PORT
# - LUKOBA_STATIC_DIR
# - LUKOBA_TMDB_URL
# - LUKOBA_TMDB_TOKEN
# - LUKOBA_TMDB_IMAGE_URL
# - LUKOBA_LOG_LEVEL
# - LUKOBA_LOG_FORMAT

[server]
# Address to bind
host = "0.0.0.0"
port = 8080

# Allowed CORS origins (empty allows any)
cors_origins = []

# Built UI served for every non-API path
static_dir = "lukoba-ui/dist"

# Upstream request timeout in seconds
request_timeout_secs = 10

[tmdb]
# Movie database API root
base_url = "https://api.themoviedb.org/3"

# API read access token (keep this out of version control)
# access_token = ""

# Image CDN root replacing the one TMDB reports (e.g. a caching mirror)
# image_base_url = "https://images.example.com/t/p/"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
