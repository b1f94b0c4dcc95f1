//! Footer with page build metadata.

use dioxus::prelude::*;

use common::page_props::SharedPageProps;

#[component]
pub fn SharedMetaFooter(shared: ReadSignal<SharedPageProps>) -> Element {
    let built = shared.read().last_build_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let requests = shared.read().api_requests;
    rsx! {
        div {
            id: "x-page-meta-footer",
            style: "
                margin-top: 40px;
                padding: 10px;
                border-top: 1px solid #DDDDDD;
                color: #888888;
                font-size: 13px;
            ",
            "Page built at {built} using {requests} API requests."
        }
    }
}
