//! Anime search surface with season filtering.

use std::collections::BTreeMap;

use dioxus::prelude::*;

use common::search_query::{EntityKind, EntitySearchQuery, SearchParams};
use common::search_result::AnimeSummary;

use crate::api::search_api::search_anime_page;
use crate::components::card::anime_summary_card::AnimeSummaryCard;
use crate::components::search_components::search_entity::{SearchEntityResults, use_entity_search};
use crate::components::search_components::search_filter::{
    SearchFilterGroup, SearchFilterSelect, SearchFilterSortBy,
};
use crate::data_definitions::filter_store::{FilterRecord, use_filter_store};
use crate::data_definitions::sort_settle::{SettleOutcome, SortSettle};

const BROWSE_DEFAULT_SORT: &str = "name";

#[component]
pub fn SearchAnime(search_query: ReadSignal<String>) -> Element {
    let initial_sort = if search_query.peek().is_empty() {
        Some(BROWSE_DEFAULT_SORT.to_string())
    } else {
        None
    };
    let store = use_filter_store(
        "filter-anime",
        FilterRecord::from([
            ("season".to_string(), None),
            ("sortBy".to_string(), initial_sort),
        ]),
    );
    let mut settle = use_signal(|| SortSettle::new(search_query.peek().clone()));

    let query_string = search_query.read().clone();
    let sort_by = store.value("sortBy");
    // read, not peek: the note_query write below must schedule the next pass
    let outcome = settle.read().preview(&query_string, &sort_by, BROWSE_DEFAULT_SORT);
    if let SettleOutcome::Settling { force_sort } = outcome {
        if let Some(corrected) = force_sort {
            store.update_field.call(("sortBy".to_string(), corrected));
        }
        settle.write().note_query(&query_string);
        return rsx! {};
    }

    let season = store.value("season");
    let searching = !query_string.is_empty();
    let entity_query = EntitySearchQuery {
        entity: EntityKind::Anime,
        query_string: query_string.clone(),
        params: SearchParams {
            filters: BTreeMap::from([("season".to_string(), season.clone())]),
            sort_by: sort_by.clone(),
        },
    };

    let season_options = vec![
        (String::new(), "Any".to_string()),
        ("Winter".to_string(), "Winter".to_string()),
        ("Spring".to_string(), "Spring".to_string()),
        ("Summer".to_string(), "Summer".to_string()),
        ("Fall".to_string(), "Fall".to_string()),
    ];

    rsx! {
        SearchFilterGroup {
            SearchFilterSelect {
                label: "Season".to_string(),
                value: season,
                options: season_options,
                on_select: move |picked| store.update_field.call(("season".to_string(), picked)),
            }
            SearchFilterSortBy {
                value: sort_by,
                searching,
                on_select: move |picked| store.update_field.call(("sortBy".to_string(), picked)),
            }
        }
        AnimeResults { query: entity_query, search_query }
    }
}

#[component]
fn AnimeResults(query: ReadSignal<EntitySearchQuery>, search_query: ReadSignal<String>) -> Element {
    let handle = use_entity_search(query, search_anime_page);
    rsx! {
        SearchEntityResults::<AnimeSummary> {
            state: handle.state,
            fetch_next_page: handle.fetch_next_page,
            search_query,
            render_result: Callback::new(|anime: AnimeSummary| rsx! {
                AnimeSummaryCard { anime }
            }),
        }
    }
}
