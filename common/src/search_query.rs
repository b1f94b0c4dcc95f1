//! Shared search query models and helpers.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};


/// A category of searchable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum EntityKind {
    #[default]
    Anime,
    Artist,
    Studio,
    Series,
}

impl EntityKind {
    /// Field name of the paged search operation in the API schema.
    pub fn search_field(&self) -> &'static str {
        match self {
            EntityKind::Anime => "animeSearch",
            EntityKind::Artist => "artistSearch",
            EntityKind::Studio => "studioSearch",
            EntityKind::Series => "seriesSearch",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Anime => "Anime",
            EntityKind::Artist => "Artists",
            EntityKind::Studio => "Studios",
            EntityKind::Series => "Series",
        }
    }
}

// Route segments use the lowercase name.
impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Anime => "anime",
            EntityKind::Artist => "artist",
            EntityKind::Studio => "studio",
            EntityKind::Series => "series",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityKind(pub String);

impl Display for UnknownEntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown entity kind: {}", self.0)
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anime" => Ok(EntityKind::Anime),
            "artist" => Ok(EntityKind::Artist),
            "studio" => Ok(EntityKind::Studio),
            "series" => Ok(EntityKind::Series),
            other => Err(UnknownEntityKind(other.to_string())),
        }
    }
}

/// Structured filter map plus sort key. A `None` filter value means "unset";
/// `sort_by: None` means no explicit sort, i.e. relevance order when a
/// free-text query is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchParams {
    pub filters: BTreeMap<String, Option<String>>,
    pub sort_by: Option<String>,
}

impl SearchParams {
    /// Filters with a concrete value, in sending order.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }
}

/// The (entity, query, params) triple an aggregated result set is keyed by.
/// Any change to this triple invalidates all accumulated pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EntitySearchQuery {
    pub entity: EntityKind,
    pub query_string: String,
    pub params: SearchParams,
}

/// One page worth of search work: the triple plus the offset cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPageRequest {
    pub query: EntitySearchQuery,
    pub cursor: u64,
}
