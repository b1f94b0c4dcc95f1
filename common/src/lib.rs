//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod page_props;
pub mod wiki_page;
pub mod browse;
