use dioxus::prelude::*;

use common::search_query::EntityKind;

use crate::components::search_components::search_anime::SearchAnime;
use crate::components::search_components::search_artist::SearchArtist;
use crate::components::search_components::search_input_top_bar::SearchInputTopBar;
use crate::components::search_components::search_series::SearchSeries;
use crate::components::search_components::search_studio::SearchStudio;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::route_param::RouteParam;
use crate::routes::Route;

const ENTITY_TABS: [EntityKind; 4] = [
    EntityKind::Anime,
    EntityKind::Artist,
    EntityKind::Studio,
    EntityKind::Series,
];

// counts and cuts characters, not bytes: titles are routinely CJK
fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

#[component]
pub fn SearchPage(entity: EntityKind, search_query: RouteParam<String>) -> Element {
    rsx! {
        Title { "ThemeBase Search: {title_ellipsis(search_query.0.clone())}" }
        SearchPageRootComponent {
            entity,
            search_query: search_query.0.clone(),
        }
    }
}

#[component]
fn SearchPageRootComponent(
    entity: ReadSignal<EntityKind>,
    search_query: ReadSignal<String>,
) -> Element {
    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",

                SearchInputTopBar { entity, original_query: search_query }
            }

            EntityTabStrip { entity, search_query }

            div {
                id: "x-search-results-container",
                style: "
                    flex-grow: 1;
                    overflow-y: auto;
                    padding: 20px;
                    background-color: #ECEEF2;
                ",
                SuspendWrapper {
                    match *entity.read() {
                        EntityKind::Anime => rsx! { SearchAnime { search_query } },
                        EntityKind::Artist => rsx! { SearchArtist { search_query } },
                        EntityKind::Studio => rsx! { SearchStudio { search_query } },
                        EntityKind::Series => rsx! { SearchSeries { search_query } },
                    }
                }
            }
        }
    }
}

/// Tab links between the entity kinds; the current query string is preserved
/// when switching.
#[component]
fn EntityTabStrip(entity: ReadSignal<EntityKind>, search_query: ReadSignal<String>) -> Element {
    rsx! {
        div {
            id: "x-entity-tabs",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                padding: 12px 20px;
                background-color: #F8FCFF;
                border-bottom: 1px solid rgb(164, 164, 164);
            ",
            for tab in ENTITY_TABS {
                EntityTab { tab, entity, search_query }
            }
        }
    }
}

#[component]
fn EntityTab(
    tab: EntityKind,
    entity: ReadSignal<EntityKind>,
    search_query: ReadSignal<String>,
) -> Element {
    let active = tab == *entity.read();
    let (background, color) = if active {
        ("#1C212D", "white")
    } else {
        ("white", "#1C212D")
    };
    rsx! {
        Link {
            to: Route::search_page(tab, search_query.read().clone()),
            span {
                style: "
                    padding: 6px 14px;
                    border: 1px solid #1C212D;
                    border-radius: 9999px;
                    font-size: 15px;
                    background-color: {background};
                    color: {color};
                ",
                "{tab.display_name()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::title_ellipsis;

    #[test]
    fn short_titles_pass_through() {
        assert_eq!(title_ellipsis("attack on titan".to_string()), "attack on titan");
        // 9 characters but 25 bytes, must come back untouched
        assert_eq!(title_ellipsis("a進撃の巨人アニメ".to_string()), "a進撃の巨人アニメ");
    }

    #[test]
    fn long_titles_truncate_on_character_boundaries() {
        let title = "劇場版魔法少女まどかマギカ叛逆の物語のテーマ".to_string();
        let shortened = title_ellipsis(title);
        assert!(shortened.ends_with("..."));
        assert_eq!(shortened.chars().count(), 21);
    }
}
