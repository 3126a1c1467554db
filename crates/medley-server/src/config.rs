//! Server configuration
//!
//! Read from Shuttle secrets at startup. Every key is optional.

use std::path::PathBuf;
use std::time::Duration;

/// Public search endpoint of the Tenor v1 API
pub const DEFAULT_TENOR_BASE_URL: &str = "https://api.tenor.com/v1/search";
/// Directory filtered images are written to and served from
pub const DEFAULT_IMAGES_DIR: &str = "static/images";
/// URL prefix stored images are served under
pub const IMAGES_URL_PREFIX: &str = "/static/images";

const DEFAULT_GIF_SEARCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Tenor API key; GIF search is disabled without one
    pub tenor_api_key: Option<String>,
    pub tenor_base_url: String,
    /// Timeout for the outbound search call
    pub gif_search_timeout: Duration,
    pub images_dir: PathBuf,
    /// Request body cap, mostly relevant for image uploads
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tenor_api_key: None,
            tenor_base_url: DEFAULT_TENOR_BASE_URL.to_string(),
            gif_search_timeout: Duration::from_secs(DEFAULT_GIF_SEARCH_TIMEOUT_SECS),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Build a config from a key lookup (Shuttle secrets, env, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            tenor_api_key: get("TENOR_API_KEY"),
            tenor_base_url: get("TENOR_BASE_URL").unwrap_or(defaults.tenor_base_url),
            gif_search_timeout: Duration::from_secs(parse_or(
                "GIF_SEARCH_TIMEOUT_SECS",
                get("GIF_SEARCH_TIMEOUT_SECS"),
                DEFAULT_GIF_SEARCH_TIMEOUT_SECS,
            )),
            images_dir: get("IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
            max_upload_bytes: parse_or(
                "MAX_UPLOAD_BYTES",
                get("MAX_UPLOAD_BYTES"),
                DEFAULT_MAX_UPLOAD_BYTES,
            ),
        }
    }

    /// Set the Tenor API key
    pub fn with_tenor_api_key(mut self, key: impl Into<String>) -> Self {
        self.tenor_api_key = Some(key.into());
        self
    }

    /// Point GIF search at another endpoint
    pub fn with_tenor_base_url(mut self, url: impl Into<String>) -> Self {
        self.tenor_base_url = url.into();
        self
    }

    /// Set the image directory
    pub fn with_images_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.images_dir = dir.into();
        self
    }

    /// Cap the request body size
    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("⚠️  Invalid {} value '{}', using default", key, raw);
            default
        }
    }
}
