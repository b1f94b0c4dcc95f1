use dioxus::prelude::*;

use common::browse::SeasonPageProps;
use common::page_props::{PageBundle, PageResolution};

use crate::api::page_api::get_season_page;
use crate::components::card::anime_summary_card::AnimeSummaryCard;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::not_found::NotFoundView;
use crate::components::page_meta::SharedMetaFooter;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::routes::Route;


#[component]
pub fn SeasonPage(year: ReadSignal<i32>, season: ReadSignal<String>) -> Element {
    let resource = use_resource(move || {
        let year = *year.read();
        let season = season.read().clone();
        async move { get_season_page(year, season).await }
    });

    let body = match &*resource.read_unchecked() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => rsx! {
            ComponentErrorDisplay { error_txt: e.to_string() }
        },
        Some(Ok(PageResolution::NotFound)) => rsx! {
            NotFoundView { message: "No anime aired in that season.".to_string() }
        },
        Some(Ok(PageResolution::Found(bundle))) => rsx! {
            SeasonPageContent { bundle: bundle.clone() }
        },
    };

    rsx! {
        Title { "ThemeBase - {season} {year}" }
        div {
            id: "x-season-page",
            style: "
                width: 100%;
                height: 100%;
                padding: 30px 40px;
                box-sizing: border-box;
                background-color: #F5F6F8;
                overflow-y: auto;
            ",
            {body}
        }
    }
}

#[component]
fn SeasonPageContent(bundle: ReadSignal<PageBundle<SeasonPageProps>>) -> Element {
    let bundle = bundle.read();
    let props = bundle.props.clone();
    rsx! {
        h1 {
            style: "font-size: 36px; color: #1C212D; text-transform: capitalize;",
            "{props.season} {props.year}"
        }

        SeasonStrip { props: props.clone() }
        YearStrip { props: props.clone() }

        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                margin-top: 20px;
                max-width: 760px;
            ",
            for anime in props.anime {
                AnimeSummaryCard { anime }
            }
        }

        SharedMetaFooter { shared: bundle.shared.clone() }
    }
}

/// Links to the other seasons of the displayed year.
#[component]
fn SeasonStrip(props: ReadSignal<SeasonPageProps>) -> Element {
    let props = props.read();
    rsx! {
        div {
            id: "x-season-strip",
            style: "display: flex; flex-direction: row; gap: 10px; margin-top: 10px;",
            for other in props.season_list.clone() {
                StripLink {
                    label: other.clone(),
                    active: other.eq_ignore_ascii_case(&props.season),
                    to: Route::SeasonPage { year: props.year, season: other.to_lowercase() },
                }
            }
        }
    }
}

/// Links to the neighboring years, current year highlighted.
#[component]
fn YearStrip(props: ReadSignal<SeasonPageProps>) -> Element {
    let props = props.read();
    let year = props.year;
    let neighbors: Vec<i32> = props
        .year_list
        .iter()
        .copied()
        .filter(|y| (y - year).abs() <= 3)
        .collect();
    rsx! {
        div {
            id: "x-year-strip",
            style: "display: flex; flex-direction: row; gap: 10px; margin-top: 10px;",
            for other in neighbors {
                StripLink {
                    label: other.to_string(),
                    active: other == year,
                    to: Route::SeasonPage { year: other, season: props.season.to_lowercase() },
                }
            }
        }
    }
}

#[component]
fn StripLink(label: String, active: bool, to: Route) -> Element {
    let (background, color) = if active {
        ("#1C212D", "white")
    } else {
        ("white", "#1C212D")
    };
    rsx! {
        Link {
            to: to,
            span {
                style: "
                    padding: 4px 12px;
                    border: 1px solid #1C212D;
                    border-radius: 9999px;
                    font-size: 14px;
                    text-transform: capitalize;
                    background-color: {background};
                    color: {color};
                ",
                "{label}"
            }
        }
    }
}
