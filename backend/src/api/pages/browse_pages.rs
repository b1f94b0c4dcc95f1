//! Page data providers for the browse listings: series index and year/season
//! pages.

use common::browse::{SeasonPageProps, SeriesIndexProps};
use common::page_props::{PageBundle, PageResolution};
use common::search_const::REVALIDATE_BROWSE_SECS;
use common::search_result::{AnimeSummary, SeriesSummary};
use serde::Deserialize;

use crate::api::pages::shared_props::shared_page_props;
use crate::api::pages::{cached_resolution, store_resolution};
use crate::app_state::AppState;
use crate::error::DataError;
use crate::gql_utils::RequestMeter;

const SERIES_INDEX_QUERY: &str = "
    query {
        seriesAll {
            slug
            name
        }
    }
";

const SEASON_PAGE_QUERY: &str = "
    query($year: Int!, $season: String!) {
        yearAll {
            value
        }
        seasonAll(year: $year) {
            value
        }
        season(year: $year, value: $season) {
            anime {
                slug name year season mediaFormat themeCount
            }
        }
    }
";

const SEASON_ORDER: [&str; 4] = ["Winter", "Spring", "Summer", "Fall"];

/// The API spells seasons capitalized ("Winter"), routes spell them
/// lowercase ("winter"). Canonicalize here so both reach the same cache
/// entry and the same GraphQL variable.
fn canonical_season(season: &str) -> String {
    let mut chars = season.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn season_cache_path(year: i32, season: &str) -> String {
    format!("/year/{year}/{}", season.to_lowercase())
}

pub async fn resolve_series_index(
    state: &AppState,
) -> Result<PageResolution<SeriesIndexProps>, DataError> {
    let path = "/series";
    if let Some(cached) = cached_resolution(state, path) {
        return Ok(cached);
    }

    let meter = RequestMeter::new();
    let data = state
        .gql
        .fetch(&state.responses, &meter, SERIES_INDEX_QUERY, serde_json::json!({}))
        .await?;
    let mut series_all: Vec<SeriesSummary> = serde_json::from_value(data["seriesAll"].clone())
        .map_err(|e| DataError::Query(format!("unexpected series payload: {e}")))?;
    series_all.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let resolution = PageResolution::Found(PageBundle {
        props: SeriesIndexProps { series_all },
        shared: shared_page_props(&meter),
        revalidate_secs: REVALIDATE_BROWSE_SECS,
    });
    store_resolution(state, path, &resolution, REVALIDATE_BROWSE_SECS);
    Ok(resolution)
}

#[derive(Debug, Deserialize)]
struct RawValue<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
struct RawSeason {
    anime: Vec<AnimeSummary>,
}

pub async fn resolve_season_page(
    state: &AppState,
    year: i32,
    season: &str,
) -> Result<PageResolution<SeasonPageProps>, DataError> {
    let season = canonical_season(season);
    let path = season_cache_path(year, &season);
    if let Some(cached) = cached_resolution(state, &path) {
        return Ok(cached);
    }

    let meter = RequestMeter::new();
    let data = state
        .gql
        .fetch(
            &state.responses,
            &meter,
            SEASON_PAGE_QUERY,
            serde_json::json!({ "year": year, "season": season }),
        )
        .await?;
    let years: Vec<RawValue<i32>> = serde_json::from_value(data["yearAll"].clone())
        .map_err(|e| DataError::Query(format!("unexpected year payload: {e}")))?;
    let seasons: Vec<RawValue<String>> = serde_json::from_value(data["seasonAll"].clone())
        .map_err(|e| DataError::Query(format!("unexpected season payload: {e}")))?;
    let raw_season: Option<RawSeason> = serde_json::from_value(data["season"].clone())
        .map_err(|e| DataError::Query(format!("unexpected season payload: {e}")))?;

    let resolution = season_resolution(
        year,
        &season,
        raw_season.map(|s| s.anime),
        years.into_iter().map(|y| y.value).collect(),
        seasons.into_iter().map(|s| s.value).collect(),
        &meter,
    );
    store_resolution(state, &path, &resolution, REVALIDATE_BROWSE_SECS);
    Ok(resolution)
}

fn season_resolution(
    year: i32,
    season: &str,
    anime: Option<Vec<AnimeSummary>>,
    mut year_list: Vec<i32>,
    season_list: Vec<String>,
    meter: &RequestMeter,
) -> PageResolution<SeasonPageProps> {
    let Some(mut anime) = anime else {
        return PageResolution::NotFound;
    };
    anime.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    year_list.sort_unstable();
    PageResolution::Found(PageBundle {
        props: SeasonPageProps {
            year,
            season: season.to_string(),
            anime,
            year_list,
            season_list: sort_seasons(season_list),
        },
        shared: shared_page_props(meter),
        revalidate_secs: REVALIDATE_BROWSE_SECS,
    })
}

/// Orders season names by airing order within a year, unknown names last.
pub fn sort_seasons(mut seasons: Vec<String>) -> Vec<String> {
    seasons.sort_by_key(|s| {
        SEASON_ORDER
            .iter()
            .position(|known| known == s)
            .unwrap_or(SEASON_ORDER.len())
    });
    seasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_casing_is_canonicalized() {
        assert_eq!(canonical_season("winter"), "Winter");
        assert_eq!(canonical_season("WINTER"), "Winter");
        assert_eq!(canonical_season("Winter"), "Winter");
        assert_eq!(
            season_cache_path(2021, "Winter"),
            season_cache_path(2021, "winter")
        );
    }

    #[test]
    fn seasons_sort_in_airing_order() {
        let sorted = sort_seasons(vec![
            "Fall".to_string(),
            "Spring".to_string(),
            "Winter".to_string(),
        ]);
        assert_eq!(sorted, vec!["Winter", "Spring", "Fall"]);
    }

    #[test]
    fn unknown_season_resolves_as_not_found() {
        let meter = RequestMeter::new();
        let resolution =
            season_resolution(2021, "Autumn", None, vec![2021], vec![], &meter);
        assert!(resolution.is_not_found());
    }

    #[test]
    fn anime_list_is_sorted_by_name() {
        let meter = RequestMeter::new();
        meter.record();
        let anime = |name: &str| AnimeSummary {
            slug: name.to_lowercase(),
            name: name.to_string(),
            year: Some(2021),
            season: Some("Winter".to_string()),
            media_format: None,
            theme_count: 1,
        };
        let resolution = season_resolution(
            2021,
            "Winter",
            Some(vec![anime("beta"), anime("Alpha")]),
            vec![2022, 2021],
            vec!["Winter".to_string()],
            &meter,
        );
        match resolution {
            PageResolution::Found(bundle) => {
                assert_eq!(bundle.props.anime[0].name, "Alpha");
                assert_eq!(bundle.props.year_list, vec![2021, 2022]);
                assert_eq!(bundle.shared.api_requests, 1);
            }
            PageResolution::NotFound => panic!("expected a found page"),
        }
    }
}
