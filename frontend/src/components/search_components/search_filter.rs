//! Filter dropdown controls shown above the search results.

use dioxus::prelude::*;

#[component]
pub fn SearchFilterGroup(children: Element) -> Element {
    rsx! {
        div {
            id: "x-search-filters",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 12px;
                margin-bottom: 16px;
            ",
            {children}
        }
    }
}

/// One labeled dropdown. The empty string is the sentinel for "no value";
/// it maps to `None` on the way out.
#[component]
pub fn SearchFilterSelect(
    label: String,
    value: Option<String>,
    options: Vec<(String, String)>,
    on_select: EventHandler<Option<String>>,
) -> Element {
    let current = value.clone().unwrap_or_default();
    rsx! {
        label {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                font-size: 13px;
                color: #555555;
            ",
            "{label}"
            select {
                style: "
                    padding: 6px 10px;
                    border: 1px solid #DDDDDD;
                    border-radius: 5px;
                    font-size: 15px;
                    background-color: #FFFFFF;
                ",
                value: "{current}",
                onchange: move |evt| {
                    let picked = evt.value();
                    if picked.is_empty() {
                        on_select.call(None);
                    } else {
                        on_select.call(Some(picked));
                    }
                },
                for (option_value, option_label) in options {
                    option {
                        value: "{option_value}",
                        selected: option_value == current,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SearchFilterFirstLetter(
    value: Option<String>,
    on_select: EventHandler<Option<String>>,
) -> Element {
    let mut options = vec![(String::new(), "Any".to_string())];
    options.extend(('A'..='Z').map(|letter| (letter.to_string(), letter.to_string())));
    rsx! {
        SearchFilterSelect {
            label: "First Letter".to_string(),
            value,
            options,
            on_select: move |picked| on_select.call(picked),
        }
    }
}

/// Sort dropdown. The relevance option (no explicit sort) is only offered
/// while a free-text query is active.
#[component]
pub fn SearchFilterSortBy(
    value: Option<String>,
    searching: ReadSignal<bool>,
    on_select: EventHandler<Option<String>>,
) -> Element {
    let mut options = Vec::new();
    if *searching.read() {
        options.push((String::new(), "Relevance".to_string()));
    }
    options.push(("name".to_string(), "A ➜ Z".to_string()));
    options.push(("-name".to_string(), "Z ➜ A".to_string()));
    options.push(("-created_at".to_string(), "Last Added".to_string()));
    rsx! {
        SearchFilterSelect {
            label: "Sort By".to_string(),
            value,
            options,
            on_select: move |picked| on_select.call(picked),
        }
    }
}
