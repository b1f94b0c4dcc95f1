pub mod search_anime;
pub mod search_artist;
pub mod search_entity;
pub mod search_filter;
pub mod search_input_top_bar;
pub mod search_series;
pub mod search_studio;
