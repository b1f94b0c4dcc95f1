use dioxus::prelude::*;

use common::search_query::EntityKind;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::routes::Route;


#[component]
pub fn SearchInputTopBar(entity: ReadSignal<EntityKind>, original_query: ReadSignal<String>) -> Element {
    let mut modified_query = use_signal(|| original_query.read().clone());
    // when the url changes, the local input state is not reset by navigation
    use_effect(move || {
        let new_query = original_query.read().clone();
        modified_query.set(new_query);
    });
    let query_has_changed = use_memo(move || *modified_query.read() != *original_query.read());
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        navigator().push(Route::search_page(*entity.read(), modified_query.read().clone()));
    };
    let search_oninput = move |event: Event<FormData>| {
        modified_query.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search anime, artists, studios and series",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{modified_query.read()}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
