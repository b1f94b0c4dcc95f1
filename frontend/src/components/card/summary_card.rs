//! Generic result card used by the artist, studio and series lists.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn SummaryCard(title: String, description: String, to: Option<Route>) -> Element {
    let body = rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                padding: 12px 16px;
                border: 1px solid #DDDDDD;
                border-radius: 5px;
                background-color: #FFFFFF;
            ",
            span {
                style: "font-size: 17px; color: #1C212D; font-weight: 600;",
                "{title}"
            }
            if !description.is_empty() {
                span {
                    style: "font-size: 14px; color: #777777;",
                    "{description}"
                }
            }
        }
    };

    match to {
        Some(to) => rsx! {
            Link {
                to: to,
                style: "text-decoration: none;",
                {body}
            }
        },
        None => body,
    }
}
