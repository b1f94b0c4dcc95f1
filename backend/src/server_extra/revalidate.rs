//! On-demand revalidation endpoint: drops one cached page so the next visit
//! regenerates it.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_state::SharedAppState;

#[derive(Debug, Deserialize)]
pub struct RevalidateParams {
    pub token: String,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct RevalidateOutcome {
    pub revalidated: bool,
}

pub async fn revalidate_page(
    State(state): State<SharedAppState>,
    Query(params): Query<RevalidateParams>,
) -> Response {
    let Ok(expected_token) = std::env::var("REVALIDATE_TOKEN") else {
        return (StatusCode::SERVICE_UNAVAILABLE, "revalidation is not configured")
            .into_response();
    };
    if params.token != expected_token {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    }

    let revalidated = state.0.pages.invalidate(&params.path);
    if revalidated {
        // drop raw responses too, or the re-resolution would read stale bodies
        state.0.responses.invalidate_all();
    }
    info!("revalidate: path={} dropped={}", params.path, revalidated);
    Json(RevalidateOutcome { revalidated }).into_response()
}
