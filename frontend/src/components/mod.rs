pub mod card;
pub mod error_boundary;
pub mod hover_card;
pub mod navbar;
pub mod not_found;
pub mod page_meta;
pub mod search_components;
pub mod suspend_boundary;
