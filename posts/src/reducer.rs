//! Reducer for the posts slice.

use crate::{actions::PostsAction, environment::PostsEnvironment, types::PostsState};
use postflow_core::{effect::Effect, reducer::Reducer};
use smallvec::{SmallVec, smallvec};

/// Folds fetch commands and lifecycle events into [`PostsState`].
///
/// | Action | `is_fetching` | `list` | `error` |
/// |---|---|---|---|
/// | `FetchPostsRequest` | true | unchanged | unchanged |
/// | `FetchPostsSuccess` | false | payload | unchanged |
/// | `FetchPostsFailure` | false | unchanged | code |
/// | `Unknown` | unchanged | unchanged | unchanged |
///
/// The two commands leave state alone and return the fetch as an effect:
/// the start event first, then the GET, run strictly in that order.
#[derive(Debug, Clone, Copy)]
pub struct PostsReducer<E> {
    _phantom: std::marker::PhantomData<E>,
}

impl<E> PostsReducer<E> {
    /// Create a new posts reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<E> Default for PostsReducer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PostsEnvironment> PostsReducer<E> {
    fn fetch(env: &E) -> Effect<PostsAction> {
        Effect::chain(vec![
            Effect::send(PostsAction::FetchPostsRequest),
            env.fetch_posts(),
        ])
    }
}

impl<E: PostsEnvironment> Reducer for PostsReducer<E> {
    type State = PostsState;
    type Action = PostsAction;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            PostsAction::FetchPosts => smallvec![Self::fetch(env)],

            PostsAction::FetchPostsIfNeeded => {
                if state.needs_fetch() {
                    smallvec![Self::fetch(env)]
                } else {
                    tracing::debug!(cached = state.list.len(), "Posts already loaded, skipping fetch");
                    smallvec![Effect::None]
                }
            },

            PostsAction::FetchPostsRequest => {
                state.is_fetching = true;
                smallvec![Effect::None]
            },

            PostsAction::FetchPostsSuccess { payload } => {
                state.is_fetching = false;
                state.list = payload;
                smallvec![Effect::None]
            },

            PostsAction::FetchPostsFailure { error } => {
                state.is_fetching = false;
                state.error = Some(error);
                smallvec![Effect::None]
            },

            PostsAction::Unknown => smallvec![Effect::None],
        }
    }
}
