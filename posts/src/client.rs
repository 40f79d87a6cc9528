//! HTTP client for the posts endpoint

use crate::{
    config::PostsConfig,
    error::{ConfigError, FetchError},
    types::Post,
};
use reqwest::{Client, Url};

/// Client for the remote posts API
///
/// One GET per call: no retry, no timeout, no pagination.
#[derive(Debug, Clone)]
pub struct PostsClient {
    client: Client,
    url: Url,
}

impl PostsClient {
    /// Create a client for `url` with default HTTP settings
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Create a client from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying client cannot be built.
    pub fn from_config(config: &PostsConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
        })
    }

    /// The endpoint this client fetches
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the posts list
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] if no response arrived
    /// - [`FetchError::Status`] for a non-2xx response
    /// - [`FetchError::Decode`] if the body is not a JSON array
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let posts = response
            .json::<Vec<Post>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }
}
