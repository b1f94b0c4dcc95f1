//! Result card for anime entries, with a season link and theme count.

use dioxus::prelude::*;

use common::search_result::AnimeSummary;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_av_icons::MdPlayArrow;

use crate::routes::Route;

#[component]
pub fn AnimeSummaryCard(anime: ReadSignal<AnimeSummary>) -> Element {
    let anime = anime.read();
    let season_link = match (anime.year, anime.season.clone()) {
        (Some(year), Some(season)) => Some((
            format!("{season} {year}"),
            Route::SeasonPage { year, season: season.to_lowercase() },
        )),
        _ => None,
    };
    let year_label = match (anime.year, &anime.season) {
        (Some(year), None) => Some(year.to_string()),
        _ => None,
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 12px 16px;
                border: 1px solid #DDDDDD;
                border-radius: 5px;
                background-color: #FFFFFF;
            ",
            div {
                style: "display: flex; flex-direction: column; gap: 4px; flex-grow: 1;",
                span {
                    style: "font-size: 17px; color: #1C212D; font-weight: 600;",
                    "{anime.name}"
                }
                div {
                    style: "display: flex; flex-direction: row; gap: 10px; font-size: 14px; color: #777777;",
                    if let Some((label, to)) = season_link {
                        Link {
                            to: to,
                            span { style: "color:#FF2F64;", "{label}" }
                        }
                    }
                    if let Some(year) = year_label {
                        span { "{year}" }
                    }
                    if let Some(format) = anime.media_format.clone() {
                        span { "{format}" }
                    }
                }
            }
            span {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 4px;
                    color: #1C212D;
                    font-size: 14px;
                ",
                Icon { icon: MdPlayArrow, style: "width: 18px; height: 18px;" }
                "{anime.theme_count} themes"
            }
        }
    }
}
