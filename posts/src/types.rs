//! State types for the posts slice.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A post exactly as the remote API returned it.
///
/// The record is opaque: no field is required or validated, so whatever
/// the endpoint sends survives a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post(Value);

impl Post {
    /// Wrap a raw JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The raw JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Numeric `id` field, when the record has one.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    /// Unwrap into the raw JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Post {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// UI state for the posts list.
///
/// Serializes with the field names a client-side store expects
/// (`list`, `isFetching`, `error`), so a server renderer can embed it
/// in the page for hydration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsState {
    /// Posts in server response order.
    pub list: Vec<Post>,

    /// True while a fetch is outstanding.
    pub is_fetching: bool,

    /// Status code of the last failed fetch.
    ///
    /// Not cleared by a later successful fetch.
    pub error: Option<u16>,
}

impl PostsState {
    /// Empty list, not fetching, no error.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: Vec::new(),
            is_fetching: false,
            error: None,
        }
    }

    /// Whether `FetchPostsIfNeeded` would go to the network.
    ///
    /// Only an empty list triggers a fetch; staleness, an in-flight fetch
    /// and a previous error are not considered.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        self.list.is_empty()
    }
}
