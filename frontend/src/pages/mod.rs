pub mod home_page;
pub mod search_page;
pub mod season_page;
pub mod series_index_page;
pub mod wiki_page;
