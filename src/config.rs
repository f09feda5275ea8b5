//! Application Configuration
//!
//! Explicit configuration values handed to the clients. A browser binary has
//! no process environment, so values are captured when the crate is built.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a single path segment (RFC 3986 unreserved pass through)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub const DEFAULT_TODOS_BASE: &str = "/api/todos";
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://api.pexels.com/v1/search";

/// Image search API settings
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSearchConfig {
    pub endpoint: String,
    /// Sent verbatim as the `Authorization` header; empty when unset
    pub api_key: String,
    pub per_page: u32,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            api_key: String::new(),
            per_page: 1,
        }
    }
}

impl ImageSearchConfig {
    /// Search URL for a free-text query
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?query={}&per_page={}",
            self.endpoint,
            utf8_percent_encode(query, NON_ALPHANUMERIC),
            self.per_page
        )
    }
}

/// App-wide configuration provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base path of the todo API, without trailing slash
    pub todos_base: String,
    pub image: ImageSearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            todos_base: DEFAULT_TODOS_BASE.to_string(),
            image: ImageSearchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build from `PEXELS_KEY` and `TODOS_API_BASE` as seen at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PEXELS_KEY"), option_env!("TODOS_API_BASE"))
    }

    pub fn from_values(api_key: Option<&str>, todos_base: Option<&str>) -> Self {
        let mut config = Self::default();
        config.image.api_key = api_key.unwrap_or_default().to_string();
        if let Some(base) = todos_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.todos_base = base.trim_end_matches('/').to_string();
        }
        config
    }

    /// URL of a single todo, `{base}/{id}` with the id escaped as one segment
    pub fn todo_url(&self, id: &str) -> String {
        format!("{}/{}", self.todos_base, utf8_percent_encode(id, PATH_SEGMENT))
    }
}
