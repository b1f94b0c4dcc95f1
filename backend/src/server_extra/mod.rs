//! Extra axum routes mounted next to the app router.

pub mod revalidate;

use crate::app_state::SharedAppState;

pub fn router(state: SharedAppState) -> axum::Router {
    axum::Router::new()
        .route(
            "/_revalidate",
            axum::routing::get(revalidate::revalidate_page),
        )
        .with_state(state)
}
