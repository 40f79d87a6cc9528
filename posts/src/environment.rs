//! Environment trait for the posts reducer.

use crate::{actions::PostsAction, client::PostsClient, error::FetchError, types::Post};
use postflow_core::effect::Effect;
use std::sync::Arc;

/// Dependencies the posts reducer needs.
///
/// Production talks to the HTTP endpoint; tests substitute an
/// implementation with canned results.
pub trait PostsEnvironment: Send + Sync {
    /// An effect that performs one GET of the posts endpoint and resolves
    /// to exactly one `FetchPostsSuccess` or `FetchPostsFailure`.
    fn fetch_posts(&self) -> Effect<PostsAction>;
}

/// Turn a fetch outcome into the lifecycle event that records it.
///
/// Every failure becomes a `FetchPostsFailure`; a failure without an HTTP
/// response carries `NO_RESPONSE_STATUS`.
#[must_use]
pub fn settle(result: Result<Vec<Post>, FetchError>) -> PostsAction {
    match result {
        Ok(payload) => {
            metrics::counter!("posts.fetch", "outcome" => "success").increment(1);
            PostsAction::FetchPostsSuccess { payload }
        },
        Err(error) => {
            metrics::counter!("posts.fetch", "outcome" => "failure").increment(1);
            tracing::warn!(%error, status = error.status_code(), "Posts fetch failed");
            PostsAction::FetchPostsFailure {
                error: error.status_code(),
            }
        },
    }
}

/// Production environment backed by [`PostsClient`].
#[derive(Clone)]
pub struct HttpPostsEnvironment {
    client: Arc<PostsClient>,
}

impl HttpPostsEnvironment {
    /// Create a new production environment.
    #[must_use]
    pub fn new(client: PostsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The underlying client.
    #[must_use]
    pub fn client(&self) -> &PostsClient {
        &self.client
    }
}

impl PostsEnvironment for HttpPostsEnvironment {
    fn fetch_posts(&self) -> Effect<PostsAction> {
        let client = Arc::clone(&self.client);

        Effect::Future(Box::pin(async move { Some(settle(client.list_posts().await)) }))
    }
}
