//! Client API calls for the paged entity search endpoints.

use common::search_query::EntityPageRequest;
use common::search_result::{AnimeSummary, ArtistSummary, SearchResultPage, SeriesSummary, StudioSummary};
use dioxus::prelude::*;


#[server]
pub async fn search_anime_page(request: EntityPageRequest) -> Result<SearchResultPage<AnimeSummary>, ServerFnError> {
    let state = backend::app_state();
    let x = backend::api::search::search_anime(&state.0, request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: e.status_code(), details: None })
}

#[server]
pub async fn search_artists_page(request: EntityPageRequest) -> Result<SearchResultPage<ArtistSummary>, ServerFnError> {
    let state = backend::app_state();
    let x = backend::api::search::search_artists(&state.0, request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: e.status_code(), details: None })
}

#[server]
pub async fn search_studios_page(request: EntityPageRequest) -> Result<SearchResultPage<StudioSummary>, ServerFnError> {
    let state = backend::app_state();
    let x = backend::api::search::search_studios(&state.0, request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: e.status_code(), details: None })
}

#[server]
pub async fn search_series_page(request: EntityPageRequest) -> Result<SearchResultPage<SeriesSummary>, ServerFnError> {
    let state = backend::app_state();
    let x = backend::api::search::search_series(&state.0, request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: e.status_code(), details: None })
}
