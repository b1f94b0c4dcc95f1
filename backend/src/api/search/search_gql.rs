//! GraphQL document builders for the paged entity search operations.

use common::search_query::{EntityKind, EntityPageRequest};
use serde_json::Value;

fn selection_set(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Anime => "slug name year season mediaFormat themeCount",
        EntityKind::Artist => "slug name songCount",
        EntityKind::Studio => "slug name animeCount",
        EntityKind::Series => "slug name",
    }
}

/// Builds the search document for one entity kind. Arguments are passed as
/// variables, never interpolated into the document.
pub fn build_search_document(entity: EntityKind) -> String {
    let field = entity.search_field();
    let selection = selection_set(entity);
    format!(
        "
    query($search: String, $filters: [FilterInput!], $sortBy: String, $limit: Int!, $offset: Int!) {{
        {field}(search: $search, filters: $filters, sortBy: $sortBy, limit: $limit, offset: $offset) {{
            {selection}
        }}
    }}
    "
    )
}

/// Variables for one page fetch. Unset filters (`None` values) are dropped
/// before sending; an empty query string is sent as no `search` argument so
/// the service stays in browse mode.
pub fn build_search_variables(request: &EntityPageRequest, limit: u64) -> Value {
    let filters = request
        .query
        .params
        .active_filters()
        .map(|(key, value)| serde_json::json!({ "key": key, "value": value }))
        .collect::<Vec<_>>();
    let search = if request.query.query_string.is_empty() {
        Value::Null
    } else {
        Value::String(request.query.query_string.clone())
    };
    serde_json::json!({
        "search": search,
        "filters": filters,
        "sortBy": request.query.params.sort_by,
        "limit": limit,
        "offset": request.cursor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_query::{EntitySearchQuery, SearchParams};

    fn studio_request(query_string: &str) -> EntityPageRequest {
        let mut params = SearchParams::default();
        params.filters.insert("name-like".to_string(), Some("A%".to_string()));
        params.filters.insert("year".to_string(), None);
        params.sort_by = Some("name".to_string());
        EntityPageRequest {
            query: EntitySearchQuery {
                entity: EntityKind::Studio,
                query_string: query_string.to_string(),
                params,
            },
            cursor: 30,
        }
    }

    #[test]
    fn unset_filters_are_dropped() {
        let variables = build_search_variables(&studio_request(""), 16);
        let filters = variables["filters"].as_array().unwrap();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0]["key"], "name-like");
        assert_eq!(filters[0]["value"], "A%");
    }

    #[test]
    fn empty_query_means_browse_mode() {
        let variables = build_search_variables(&studio_request(""), 16);
        assert!(variables["search"].is_null());
        let variables = build_search_variables(&studio_request("ghibli"), 16);
        assert_eq!(variables["search"], "ghibli");
    }

    #[test]
    fn document_names_the_entity_field() {
        let document = build_search_document(EntityKind::Artist);
        assert!(document.contains("artistSearch("));
        assert!(document.contains("songCount"));
    }
}
