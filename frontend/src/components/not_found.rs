//! View shown when a page provider resolves to no content.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundView(message: String) -> Element {
    rsx! {
        div {
            id: "x-not-found",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 16px;
                padding: 60px;
            ",
            h1 {
                style: "font-size: 44px; color: #1C212D;",
                "404"
            }
            p {
                style: "font-size: 20px; color: #555555;",
                "{message}"
            }
            Link {
                to: Route::HomePage { },
                span {
                    style: "color:#FF2F64; font-size: 18px;",
                    "Return to Home Page"
                }
            }
        }
    }
}
