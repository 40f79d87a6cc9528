//! Configuration for the posts fetcher.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::ConfigError;
use reqwest::Url;
use std::env;

/// Endpoint used when `POSTS_API_URL` is unset.
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PostsConfig {
    /// Posts endpoint (`POSTS_API_URL`)
    pub api_url: Url,
    /// User-Agent header sent with every request (`POSTS_USER_AGENT`)
    pub user_agent: String,
    /// Tracing filter directives (`RUST_LOG`)
    pub log_level: String,
}

impl PostsConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `POSTS_API_URL` is not a valid http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `POSTS_API_URL` is not a valid http(s) URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("POSTS_API_URL").unwrap_or_else(|| DEFAULT_POSTS_URL.to_string());

        Ok(Self {
            api_url: parse_endpoint(&raw_url)?,
            user_agent: lookup("POSTS_USER_AGENT")
                .unwrap_or_else(|| format!("postflow/{}", env!("CARGO_PKG_VERSION"))),
            log_level: lookup("RUST_LOG")
                .unwrap_or_else(|| "postflow_posts=info,postflow_runtime=info".to_string()),
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
