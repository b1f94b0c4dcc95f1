//! Client API calls for the statically resolved pages.

use common::browse::{SeasonPageProps, SeriesIndexProps};
use common::page_props::PageResolution;
use common::wiki_page::WikiPageProps;
use dioxus::prelude::*;


#[server]
pub async fn get_wiki_page(slug: String) -> Result<PageResolution<WikiPageProps>, ServerFnError> {
    let state = backend::app_state();
    let x = backend::api::pages::resolve_wiki_page(&state.0, &slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: e.status_code(), details: None })
}

#[server]
pub async fn get_series_index() -> Result<PageResolution<SeriesIndexProps>, ServerFnError> {
    let state = backend::app_state();
    let x = backend::api::pages::resolve_series_index(&state.0).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: e.status_code(), details: None })
}

#[server]
pub async fn get_season_page(year: i32, season: String) -> Result<PageResolution<SeasonPageProps>, ServerFnError> {
    let state = backend::app_state();
    let x = backend::api::pages::resolve_season_page(&state.0, year, &season).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: e.status_code(), details: None })
}
