use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use crate::error::DataError;
use crate::gql_utils::request_meter::RequestMeter;
use crate::gql_utils::response_cache::ResponseCache;

#[derive(Debug, Deserialize)]
struct GraphqlResponseBody {
    data: Option<Value>,
    errors: Option<Vec<GraphqlErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorItem {
    message: String,
}

/// HTTP client for the upstream GraphQL API.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphqlClient {
    pub fn from_env() -> Self {
        let endpoint = std::env::var("THEMEBASE_API_URL")
            .unwrap_or("http://127.0.0.1:8000/graphql".to_string());
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Executes one GraphQL document and returns its `data` object. Responses
    /// are looked up in and written through to `cache`; `meter` is bumped only
    /// when a real upstream request goes out.
    pub async fn fetch(
        &self,
        cache: &ResponseCache,
        meter: &RequestMeter,
        query: &str,
        variables: Value,
    ) -> Result<Value, DataError> {
        let payload = serde_json::json!({
            "query": query,
            "variables": variables,
        });
        let cache_key = sha256::digest(payload.to_string());

        if let Some(cached_body) = cache.get(&cache_key, Utc::now()) {
            if let Ok(data) = parse_graphql_body(&cached_body) {
                tracing::debug!("graphql cache hit: {}", cache_key);
                return Ok(data);
            }
        }

        meter.record();
        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            return Err(DataError::Network(format!("{status}: {body}")));
        }

        let data = parse_graphql_body(&body)?;
        cache.insert(cache_key, body, Utc::now());
        Ok(data)
    }
}

/// Decodes a raw GraphQL response body. Service-reported errors map to
/// `QueryError`, malformed bodies to `NetworkError`.
pub fn parse_graphql_body(body: &str) -> Result<Value, DataError> {
    let parsed: GraphqlResponseBody = serde_json::from_str(body)
        .map_err(|e| DataError::Network(format!("malformed response: {e}")))?;
    if let Some(errors) = parsed.errors {
        let messages = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::error!("graphql query rejected: {}", messages);
        return Err(DataError::Query(messages));
    }
    parsed
        .data
        .ok_or_else(|| DataError::Network("response without data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_data_object() {
        let data = parse_graphql_body(r#"{"data":{"page":{"name":"About"}}}"#).unwrap();
        assert_eq!(data["page"]["name"], "About");
    }

    #[test]
    fn service_errors_map_to_query_error() {
        let err =
            parse_graphql_body(r#"{"data":null,"errors":[{"message":"bad sort key"}]}"#)
                .unwrap_err();
        assert_eq!(err, DataError::Query("bad sort key".to_string()));
    }

    #[test]
    fn malformed_body_maps_to_network_error() {
        let err = parse_graphql_body("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, DataError::Network(_)));
    }
}
