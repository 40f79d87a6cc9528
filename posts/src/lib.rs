//! # Posts
//!
//! UI state for a list of posts fetched from a remote JSON API.
//!
//! The slice holds the list, an `is_fetching` flag and the status code of
//! the last failed fetch. Two commands drive it:
//!
//! - `FetchPosts` always fetches: a start event, one GET, then a success or
//!   failure event.
//! - `FetchPostsIfNeeded` fetches only while the list is empty. A loaded
//!   list, however old, suppresses refetching.
//!
//! Nothing guards against two overlapping `FetchPosts`; whichever GET
//! resolves last decides the final state.
//!
//! ## Example
//!
//! ```no_run
//! use postflow_posts::{
//!     HttpPostsEnvironment, PostsAction, PostsClient, PostsConfig, PostsReducer, PostsState,
//! };
//! use postflow_runtime::Store;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = PostsConfig::from_env()?;
//! let env = HttpPostsEnvironment::new(PostsClient::from_config(&config)?);
//! let store = Store::new(PostsState::new(), PostsReducer::new(), env);
//!
//! let mut handle = store.send(PostsAction::FetchPostsIfNeeded).await?;
//! handle.wait().await;
//!
//! let count = store.state(|s| s.list.len()).await;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod client;
pub mod config;
pub mod environment;
pub mod error;
pub mod reducer;
pub mod types;

pub use actions::PostsAction;
pub use client::PostsClient;
pub use config::PostsConfig;
pub use environment::{HttpPostsEnvironment, PostsEnvironment};
pub use error::{ConfigError, FetchError, NO_RESPONSE_STATUS};
pub use reducer::PostsReducer;
pub use types::{Post, PostsState};
