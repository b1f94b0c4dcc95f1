use dioxus::prelude::*;

use common::browse::SeriesIndexProps;
use common::page_props::{PageBundle, PageResolution};
use common::search_query::EntityKind;
use common::search_result::SeriesSummary;

use crate::api::page_api::get_series_index;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::not_found::NotFoundView;
use crate::components::page_meta::SharedMetaFooter;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::routes::Route;


/// Alphabetical groups for the index: "A" to "Z" plus a trailing "#" bucket
/// for names that start with anything else.
fn group_by_first_letter(series_all: &[SeriesSummary]) -> Vec<(String, Vec<SeriesSummary>)> {
    let mut groups: Vec<(String, Vec<SeriesSummary>)> = Vec::new();
    let mut other: Vec<SeriesSummary> = Vec::new();
    for series in series_all {
        let letter = series
            .name
            .chars()
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase());
        match letter {
            Some(letter) => {
                let key = letter.to_string();
                match groups.last_mut() {
                    Some((last, bucket)) if *last == key => bucket.push(series.clone()),
                    _ => groups.push((key, vec![series.clone()])),
                }
            }
            None => other.push(series.clone()),
        }
    }
    if !other.is_empty() {
        groups.push(("#".to_string(), other));
    }
    groups
}

#[component]
pub fn SeriesIndexPage() -> Element {
    let resource = use_resource(|| async move { get_series_index().await });

    let body = match &*resource.read_unchecked() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => rsx! {
            ComponentErrorDisplay { error_txt: e.to_string() }
        },
        Some(Ok(PageResolution::NotFound)) => rsx! {
            NotFoundView { message: "The series index is not available.".to_string() }
        },
        Some(Ok(PageResolution::Found(bundle))) => rsx! {
            SeriesIndexContent { bundle: bundle.clone() }
        },
    };

    rsx! {
        Title { "ThemeBase - Series Index" }
        div {
            id: "x-series-index-page",
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
fn SeriesIndexContent(bundle: ReadSignal<PageBundle<SeriesIndexProps>>) -> Element {
    let bundle = bundle.read();
    let groups = group_by_first_letter(&bundle.props.series_all);
    rsx! {
        h1 {
            style: "font-size: 36px; color: #1C212D;",
            "Series Index"
        }
        for (letter, bucket) in groups {
            div {
                key: "{letter}",
                h2 {
                    style: "font-size: 24px; color: #FF2F64; margin-top: 24px;",
                    "{letter}"
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 4px;",
                    for series in bucket {
                        Link {
                            key: "{series.slug}",
                            to: Route::search_page(EntityKind::Series, series.name.clone()),
                            span {
                                style: "color: #1C212D; font-size: 16px;",
                                "{series.name}"
                            }
                        }
                    }
                }
            }
        }
        SharedMetaFooter { shared: bundle.shared.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str) -> SeriesSummary {
        SeriesSummary {
            slug: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
        }
    }

    #[test]
    fn groups_follow_input_order_with_trailing_other_bucket() {
        let all = vec![series("Aria"), series("Akira"), series("Berserk"), series("86")];
        let groups = group_by_first_letter(&all);
        let letters: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(letters, vec!["A", "B", "#"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[2].1[0].name, "86");
    }

    #[test]
    fn empty_index_has_no_groups() {
        assert!(group_by_first_letter(&[]).is_empty());
    }
}
