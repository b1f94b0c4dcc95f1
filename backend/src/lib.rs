//! Backend data layer: GraphQL transport, entity search, page data providers
//! and the revalidation endpoint.

pub mod api;
pub mod app_state;
pub mod error;
pub mod gql_utils;
pub mod server_extra;

pub use app_state::{AppState, SharedAppState, app_state};
pub use error::DataError;
