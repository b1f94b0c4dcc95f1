use serde::{Deserialize, Serialize};


/// One fetched batch of search results. `next_cursor` is the offset of the
/// following page; `None` is the end-of-results marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage<T> {
    pub items: Vec<T>,
    pub cursor: u64,
    pub next_cursor: Option<u64>,
}

impl<T> SearchResultPage<T> {
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeSummary {
    pub slug: String,
    pub name: String,
    pub year: Option<i32>,
    pub season: Option<String>,
    pub media_format: Option<String>,
    #[serde(default)]
    pub theme_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub song_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioSummary {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub anime_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub slug: String,
    pub name: String,
}
