//! Process-wide application state: GraphQL client plus the explicit caches.

use std::sync::{Arc, OnceLock};

use crate::api::pages::page_cache::PageCache;
use crate::gql_utils::{GraphqlClient, ResponseCache};

#[derive(Debug)]
pub struct AppState {
    pub gql: GraphqlClient,
    pub responses: ResponseCache,
    pub pages: PageCache,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            gql: GraphqlClient::from_env(),
            responses: ResponseCache::new(),
            pages: PageCache::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SharedAppState(pub Arc<AppState>);

static APP_STATE: OnceLock<SharedAppState> = OnceLock::new();

/// The one state instance of this process, built from the environment on
/// first use. Handed to the axum router as state and to server fns directly.
pub fn app_state() -> SharedAppState {
    APP_STATE
        .get_or_init(|| SharedAppState(Arc::new(AppState::from_env())))
        .clone()
}
