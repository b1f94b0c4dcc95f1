pub mod anime_summary_card;
pub mod summary_card;
