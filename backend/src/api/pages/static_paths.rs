//! Enumeration of prebuildable page paths, used to warm the page cache at
//! server start.

use serde::Deserialize;

use crate::api::pages::{resolve_season_page, resolve_series_index, resolve_wiki_page};
use crate::app_state::AppState;
use crate::error::DataError;
use crate::gql_utils::RequestMeter;

const WIKI_PATHS_QUERY: &str = "
    query {
        pageAll {
            slug
        }
    }
";

const SEASON_PATHS_QUERY: &str = "
    query {
        yearAll {
            value
            seasons {
                value
            }
        }
    }
";

#[derive(Debug, Deserialize)]
struct RawSlug {
    slug: String,
}

#[derive(Debug, Deserialize)]
struct RawYear {
    value: i32,
    seasons: Vec<RawSeasonValue>,
}

#[derive(Debug, Deserialize)]
struct RawSeasonValue {
    value: String,
}

pub async fn wiki_page_paths(state: &AppState) -> Result<Vec<String>, DataError> {
    let meter = RequestMeter::new();
    let data = state
        .gql
        .fetch(&state.responses, &meter, WIKI_PATHS_QUERY, serde_json::json!({}))
        .await?;
    let slugs: Vec<RawSlug> = serde_json::from_value(data["pageAll"].clone())
        .map_err(|e| DataError::Query(format!("unexpected page list payload: {e}")))?;
    Ok(slugs.into_iter().map(|s| s.slug).collect())
}

pub async fn season_paths(state: &AppState) -> Result<Vec<(i32, String)>, DataError> {
    let meter = RequestMeter::new();
    let data = state
        .gql
        .fetch(&state.responses, &meter, SEASON_PATHS_QUERY, serde_json::json!({}))
        .await?;
    let years: Vec<RawYear> = serde_json::from_value(data["yearAll"].clone())
        .map_err(|e| DataError::Query(format!("unexpected year list payload: {e}")))?;
    Ok(years
        .into_iter()
        .flat_map(|year| {
            year.seasons
                .into_iter()
                .map(move |season| (year.value, season.value))
        })
        .collect())
}

/// Resolves every enumerable page once so first visitors hit the cache.
/// Failures are logged and skipped; the server starts regardless.
pub async fn prewarm_pages(state: &AppState) {
    if let Err(e) = resolve_series_index(state).await {
        tracing::warn!("prewarm: series index failed: {}", e);
    }
    match wiki_page_paths(state).await {
        Ok(slugs) => {
            for slug in slugs {
                if let Err(e) = resolve_wiki_page(state, &slug).await {
                    tracing::warn!("prewarm: wiki page {} failed: {}", slug, e);
                }
            }
        }
        Err(e) => tracing::warn!("prewarm: wiki path listing failed: {}", e),
    }
    match season_paths(state).await {
        Ok(paths) => {
            for (year, season) in paths {
                if let Err(e) = resolve_season_page(state, year, &season).await {
                    tracing::warn!("prewarm: season {}/{} failed: {}", year, season, e);
                }
            }
        }
        Err(e) => tracing::warn!("prewarm: season path listing failed: {}", e),
    }
    tracing::info!("prewarm: page cache warmed");
}
