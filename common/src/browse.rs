//! Shared models for the browse listings: series index and year/season pages.

use serde::{Deserialize, Serialize};

use crate::search_result::{AnimeSummary, SeriesSummary};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesIndexProps {
    pub series_all: Vec<SeriesSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPageProps {
    pub year: i32,
    pub season: String,
    pub anime: Vec<AnimeSummary>,
    /// All years with content, ascending, for the year navigation strip.
    pub year_list: Vec<i32>,
    /// Seasons of the requested year in airing order.
    pub season_list: Vec<String>,
}
