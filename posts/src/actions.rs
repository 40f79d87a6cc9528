//! Actions for the posts slice.

use crate::types::Post;
use serde::{Deserialize, Serialize};

/// Everything the posts reducer can receive.
///
/// Two commands start work (`FetchPosts`, `FetchPostsIfNeeded`); three
/// lifecycle events record its progress. Actions travel as JSON objects
/// tagged by `type`, and any tag this slice does not own decodes to
/// [`PostsAction::Unknown`], which the reducer ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostsAction {
    /// Fetch unconditionally: start event, then one GET.
    #[serde(rename = "@posts/FETCH_POSTS")]
    FetchPosts,

    /// Fetch only when the list is empty.
    #[serde(rename = "@posts/FETCH_POSTS_IF_NEEDED")]
    FetchPostsIfNeeded,

    /// A fetch has started.
    #[serde(rename = "@posts/FETCH_POSTS_REQUEST")]
    FetchPostsRequest,

    /// A fetch returned the posts list.
    #[serde(rename = "@posts/FETCH_POSTS_SUCCESS")]
    FetchPostsSuccess {
        /// Decoded response body, in server order.
        payload: Vec<Post>,
    },

    /// A fetch failed.
    #[serde(rename = "@posts/FETCH_POSTS_FAILURE")]
    FetchPostsFailure {
        /// HTTP status, or `NO_RESPONSE_STATUS` when no response arrived.
        error: u16,
    },

    /// An action owned by some other slice.
    #[serde(other)]
    Unknown,
}

impl PostsAction {
    /// Whether this action ends a fetch.
    ///
    /// Useful as the predicate for `Store::send_and_wait_for`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::FetchPostsSuccess { .. } | Self::FetchPostsFailure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code

    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_type_tags() {
        assert_eq!(
            serde_json::to_value(PostsAction::FetchPostsRequest).unwrap(),
            json!({"type": "@posts/FETCH_POSTS_REQUEST"})
        );
        assert_eq!(
            serde_json::to_value(PostsAction::FetchPostsFailure { error: 404 }).unwrap(),
            json!({"type": "@posts/FETCH_POSTS_FAILURE", "error": 404})
        );
    }

    #[test]
    fn test_success_carries_payload() {
        let action: PostsAction = serde_json::from_value(json!({
            "type": "@posts/FETCH_POSTS_SUCCESS",
            "payload": [{"id": 1}, {"id": 2}]
        }))
        .unwrap();

        let PostsAction::FetchPostsSuccess { payload } = action else {
            unreachable!("tag selects the success variant");
        };
        let ids: Vec<_> = payload.iter().filter_map(Post::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_foreign_action_decodes_to_unknown() {
        let action: PostsAction =
            serde_json::from_value(json!({"type": "@router/LOCATION_CHANGE", "path": "/"}))
                .unwrap();
        assert_eq!(action, PostsAction::Unknown);
    }

    #[test]
    fn test_terminal_actions() {
        assert!(PostsAction::FetchPostsSuccess { payload: vec![] }.is_terminal());
        assert!(PostsAction::FetchPostsFailure { error: 500 }.is_terminal());
        assert!(!PostsAction::FetchPostsRequest.is_terminal());
        assert!(!PostsAction::FetchPosts.is_terminal());
        assert!(!PostsAction::Unknown.is_terminal());
    }
}
