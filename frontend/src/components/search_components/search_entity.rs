//! Hook and result list shared by all entity search surfaces.

use dioxus::prelude::*;

use common::search_query::{EntityPageRequest, EntitySearchQuery};
use common::search_result::SearchResultPage;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdAutorenew;
use dioxus_free_icons::icons::md_navigation_icons::MdExpandMore;

use crate::components::error_boundary::ComponentErrorDisplay;
use crate::data_definitions::entity_search::{
    EntitySearchState, SearchStatus, empty_results_message,
};

pub struct EntitySearchHandle<T: 'static> {
    pub state: Signal<EntitySearchState<T>>,
    pub fetch_next_page: Callback<()>,
}

impl<T: 'static> Clone for EntitySearchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for EntitySearchHandle<T> {}

/// Drives one [`EntitySearchState`] from the reactive query parameters. A
/// parameter change resets the aggregator and refetches page one; the
/// returned callback requests the next page and is a no-op while a fetch is
/// in flight or past the last page.
pub fn use_entity_search<T, F, Fut>(
    query: ReadSignal<EntitySearchQuery>,
    fetch: F,
) -> EntitySearchHandle<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(EntityPageRequest) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<SearchResultPage<T>, ServerFnError>> + 'static,
{
    let mut state = use_signal(|| EntitySearchState::new(query.peek().clone()));

    let start_fetch = Callback::new(move |_: ()| {
        let claimed = state.write().begin_fetch();
        let Some((ticket, cursor)) = claimed else {
            return;
        };
        let request = EntityPageRequest {
            query: state.peek().query().clone(),
            cursor,
        };
        let fetch = fetch.clone();
        spawn(async move {
            match fetch(request).await {
                Ok(page) => {
                    state.write().apply_page(ticket, page);
                }
                Err(e) => {
                    state.write().apply_error(ticket, e.to_string());
                }
            }
        });
    });

    use_effect(move || {
        let current = query.read().clone();
        if state.peek().query() != &current {
            state.write().set_query(current);
        }
        if state.peek().wants_first_page() {
            start_fetch.call(());
        }
    });

    EntitySearchHandle {
        state,
        fetch_next_page: start_fetch,
    }
}

/// Renders the accumulated results plus the load-more control. The previous
/// result list stays visible (dimmed) while the first page of changed
/// parameters is pending.
#[component]
pub fn SearchEntityResults<T: Clone + PartialEq + 'static>(
    state: Signal<EntitySearchState<T>>,
    fetch_next_page: Callback<()>,
    search_query: ReadSignal<String>,
    render_result: Callback<T, Element>,
) -> Element {
    let view = state.read().view();

    if view.status == SearchStatus::Error {
        let error_txt = view.error.unwrap_or_else(|| "Unknown error".to_string());
        return rsx! {
            ComponentErrorDisplay {
                error_txt,
            }
        };
    }

    if view.status == SearchStatus::Loading && !view.is_placeholder {
        return rsx! {
            div {
                style: "color:#777777; font-size: 18px; padding: 20px;",
                "Searching..."
            }
        };
    }

    if view.items.is_empty() && view.status == SearchStatus::Ready {
        let message = empty_results_message(&search_query.read());
        return rsx! {
            div {
                style: "color:#777777; font-size: 18px; padding: 20px;",
                "{message}"
            }
        };
    }

    let loading = view.status == SearchStatus::LoadingMore || view.is_placeholder;
    let opacity = if view.is_placeholder { "0.5" } else { "1" };

    rsx! {
        div {
            id: "x-search-results",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                opacity: {opacity};
            ",
            for item in view.items {
                {render_result.call(item)}
            }
        }
        if view.has_next_page || view.is_placeholder {
            LoadMoreButton {
                loading,
                on_press: move |_| {
                    fetch_next_page.call(());
                },
            }
        }
    }
}

#[component]
fn LoadMoreButton(loading: ReadSignal<bool>, on_press: EventHandler<()>) -> Element {
    rsx! {
        button {
            id: "x-load-more",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 6px;
                margin-top: 8px;
                padding: 8px 16px;
                border: 1px solid #DDDDDD;
                border-radius: 5px;
                background-color: #FFFFFF;
                cursor: pointer;
                font-size: 15px;
            ",
            onclick: move |_| {
                // clicks are ignored while a page is already pending
                if !*loading.read() {
                    on_press.call(());
                }
            },
            if *loading.read() {
                Icon { icon: MdAutorenew, style: "width: 18px; height: 18px;" }
                "Loading..."
            } else {
                Icon { icon: MdExpandMore, style: "width: 18px; height: 18px;" }
                "Load More"
            }
        }
    }
}
