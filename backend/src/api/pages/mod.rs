//! Page data providers: per-route resolution with not-found semantics,
//! shared metadata and revalidation deadlines.

pub mod browse_pages;
pub mod page_cache;
pub mod shared_props;
pub mod static_paths;
pub mod wiki_page;

pub use browse_pages::{resolve_season_page, resolve_series_index};
pub use static_paths::prewarm_pages;
pub use wiki_page::resolve_wiki_page;

use chrono::Utc;
use common::page_props::PageResolution;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::app_state::AppState;

/// Looks up a previously resolved page that has not passed its revalidation
/// deadline yet.
pub(crate) fn cached_resolution<T: DeserializeOwned>(
    state: &AppState,
    path: &str,
) -> Option<PageResolution<T>> {
    let body = state.pages.lookup(path, Utc::now())?;
    serde_json::from_value(body).ok()
}

/// Stores a resolution, not-found outcomes included, under the route path.
pub(crate) fn store_resolution<T: Serialize>(
    state: &AppState,
    path: &str,
    resolution: &PageResolution<T>,
    revalidate_secs: u64,
) {
    match serde_json::to_value(resolution) {
        Ok(body) => state.pages.store(path, body, revalidate_secs, Utc::now()),
        Err(e) => tracing::error!("page cache: failed to serialize {}: {}", path, e),
    }
}
