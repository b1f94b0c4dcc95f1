//! Paged search endpoints, one per entity kind.

use common::search_const::PAGE_SIZE;
use common::search_query::{EntityKind, EntityPageRequest};
use common::search_result::{
    AnimeSummary, ArtistSummary, SearchResultPage, SeriesSummary, StudioSummary,
};
use serde::de::DeserializeOwned;

use crate::api::search::search_gql::{build_search_document, build_search_variables};
use crate::app_state::AppState;
use crate::error::DataError;
use crate::gql_utils::RequestMeter;

/// Rows are fetched with `PAGE_SIZE + 1` so the extra row tells us whether a
/// next page exists; it is dropped before returning.
fn page_from_rows<T>(mut rows: Vec<T>, cursor: u64) -> SearchResultPage<T> {
    let has_more = rows.len() as u64 > PAGE_SIZE;
    if has_more {
        rows.truncate(PAGE_SIZE as usize);
    }
    SearchResultPage {
        items: rows,
        cursor,
        next_cursor: has_more.then(|| cursor + PAGE_SIZE),
    }
}

async fn run_entity_search<T: DeserializeOwned>(
    state: &AppState,
    request: &EntityPageRequest,
) -> Result<SearchResultPage<T>, DataError> {
    let entity = request.query.entity;
    let document = build_search_document(entity);
    let variables = build_search_variables(request, PAGE_SIZE + 1);
    let meter = RequestMeter::new();
    let data = state
        .gql
        .fetch(&state.responses, &meter, &document, variables)
        .await?;
    let rows: Vec<T> = serde_json::from_value(data[entity.search_field()].clone())
        .map_err(|e| DataError::Query(format!("unexpected search payload: {e}")))?;
    tracing::debug!(
        "entity search: {} cursor={} rows={}",
        entity,
        request.cursor,
        rows.len()
    );
    Ok(page_from_rows(rows, request.cursor))
}

pub async fn search_anime(
    state: &AppState,
    request: EntityPageRequest,
) -> Result<SearchResultPage<AnimeSummary>, DataError> {
    debug_assert_eq!(request.query.entity, EntityKind::Anime);
    run_entity_search(state, &request).await
}

pub async fn search_artists(
    state: &AppState,
    request: EntityPageRequest,
) -> Result<SearchResultPage<ArtistSummary>, DataError> {
    debug_assert_eq!(request.query.entity, EntityKind::Artist);
    run_entity_search(state, &request).await
}

pub async fn search_studios(
    state: &AppState,
    request: EntityPageRequest,
) -> Result<SearchResultPage<StudioSummary>, DataError> {
    debug_assert_eq!(request.query.entity, EntityKind::Studio);
    run_entity_search(state, &request).await
}

pub async fn search_series(
    state: &AppState,
    request: EntityPageRequest,
) -> Result<SearchResultPage<SeriesSummary>, DataError> {
    debug_assert_eq!(request.query.entity, EntityKind::Series);
    run_entity_search(state, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_batch_yields_next_cursor() {
        let rows = (0..PAGE_SIZE + 1).collect::<Vec<_>>();
        let page = page_from_rows(rows, 0);
        assert_eq!(page.items.len() as u64, PAGE_SIZE);
        assert_eq!(page.next_cursor, Some(PAGE_SIZE));
    }

    #[test]
    fn short_batch_ends_pagination() {
        let rows = (0..3).collect::<Vec<_>>();
        let page = page_from_rows(rows, PAGE_SIZE);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.cursor, PAGE_SIZE);
        assert_eq!(page.next_cursor, None);
        assert!(!page.has_next_page());
    }

    #[test]
    fn exact_batch_ends_pagination() {
        let rows = (0..PAGE_SIZE).collect::<Vec<_>>();
        let page = page_from_rows(rows, 0);
        assert_eq!(page.items.len() as u64, PAGE_SIZE);
        assert_eq!(page.next_cursor, None);
    }
}
