//! Non-visual state and parsing helpers used by the components.

pub mod entity_search;
pub mod filter_store;
pub mod markdown;
pub mod route_param;
pub mod sort_settle;
