//! Page data provider for wiki documentation pages.

use common::page_props::{PageBundle, PageResolution};
use common::search_const::REVALIDATE_WIKI_PAGE_SECS;
use common::wiki_page::{WikiHeading, WikiPageProps, heading_slug};
use serde::Deserialize;

use crate::api::pages::shared_props::shared_page_props;
use crate::api::pages::{cached_resolution, store_resolution};
use crate::app_state::AppState;
use crate::error::DataError;
use crate::gql_utils::RequestMeter;

const WIKI_PAGE_QUERY: &str = "
    query($slug: String!) {
        page(slug: $slug) {
            name
            body
        }
    }
";

#[derive(Debug, Deserialize)]
struct RawWikiPage {
    name: String,
    body: String,
}

pub async fn resolve_wiki_page(
    state: &AppState,
    slug: &str,
) -> Result<PageResolution<WikiPageProps>, DataError> {
    let path = format!("/wiki/{slug}");
    if let Some(cached) = cached_resolution(state, &path) {
        return Ok(cached);
    }

    let meter = RequestMeter::new();
    let data = state
        .gql
        .fetch(
            &state.responses,
            &meter,
            WIKI_PAGE_QUERY,
            serde_json::json!({ "slug": slug }),
        )
        .await?;
    let raw: Option<RawWikiPage> = serde_json::from_value(data["page"].clone())
        .map_err(|e| DataError::Query(format!("unexpected page payload: {e}")))?;

    let resolution = wiki_resolution(raw, &meter);
    store_resolution(state, &path, &resolution, REVALIDATE_WIKI_PAGE_SECS);
    Ok(resolution)
}

fn wiki_resolution(raw: Option<RawWikiPage>, meter: &RequestMeter) -> PageResolution<WikiPageProps> {
    let Some(raw) = raw else {
        return PageResolution::NotFound;
    };
    let headings = extract_headings(&raw.body);
    PageResolution::Found(PageBundle {
        props: WikiPageProps {
            name: raw.name,
            headings,
            body: raw.body,
        },
        shared: shared_page_props(meter),
        revalidate_secs: REVALIDATE_WIKI_PAGE_SECS,
    })
}

/// Section headings (levels 2 and 3) of a markdown body, skipping fenced code
/// blocks.
pub fn extract_headings(body: &str) -> Vec<WikiHeading> {
    let mut headings = Vec::new();
    let mut in_code_block = false;
    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }
        let (depth, text) = if let Some(rest) = trimmed.strip_prefix("### ") {
            (3, rest)
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            (2, rest)
        } else {
            continue;
        };
        let text = text.trim();
        headings.push(WikiHeading {
            text: text.to_string(),
            slug: heading_slug(text),
            depth,
        });
    }
    headings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_resolves_as_not_found() {
        let meter = RequestMeter::new();
        meter.record();
        let resolution = wiki_resolution(None, &meter);
        assert!(resolution.is_not_found());
    }

    #[test]
    fn found_page_carries_shared_metadata_and_deadline() {
        let meter = RequestMeter::new();
        meter.record();
        let raw = RawWikiPage {
            name: "About".to_string(),
            body: "## History\ntext".to_string(),
        };
        match wiki_resolution(Some(raw), &meter) {
            PageResolution::Found(bundle) => {
                assert_eq!(bundle.shared.api_requests, 1);
                assert_eq!(bundle.revalidate_secs, REVALIDATE_WIKI_PAGE_SECS);
                assert_eq!(bundle.props.headings.len(), 1);
            }
            PageResolution::NotFound => panic!("expected a found page"),
        }
    }

    #[test]
    fn headings_skip_fenced_code_blocks() {
        let body = "\
## Overview
text
```
## not a heading
```
### Details
";
        let headings = extract_headings(body);
        assert_eq!(
            headings,
            vec![
                WikiHeading { text: "Overview".to_string(), slug: "overview".to_string(), depth: 2 },
                WikiHeading { text: "Details".to_string(), slug: "details".to_string(), depth: 3 },
            ]
        );
    }

}
