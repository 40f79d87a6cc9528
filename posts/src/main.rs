//! Posts fetcher binary
//!
//! Loads configuration, fetches the posts list once through the store and
//! prints the resulting state as it would be embedded for hydration.

use postflow_posts::{
    HttpPostsEnvironment, PostsAction, PostsClient, PostsConfig, PostsReducer, PostsState,
};
use postflow_runtime::Store;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PostsConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = PostsClient::from_config(&config)?;
    let store = Store::new(
        PostsState::new(),
        PostsReducer::new(),
        HttpPostsEnvironment::new(client),
    );

    info!(url = %config.api_url, "Fetching posts");
    let mut handle = store.send(PostsAction::FetchPostsIfNeeded).await?;
    handle.wait().await;

    // No-op once the list is loaded
    let mut handle = store.send(PostsAction::FetchPostsIfNeeded).await?;
    handle.wait().await;

    let state = store.state(PostsState::clone).await;
    match state.error {
        Some(status) => warn!(status, "Posts fetch failed"),
        None => info!(count = state.list.len(), "Posts loaded"),
    }

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
