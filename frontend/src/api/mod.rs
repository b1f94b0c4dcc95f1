//! Server fn bridge between the components and the backend data layer.

pub mod page_api;
pub mod search_api;
