//! GraphQL transport utilities: HTTP client, response cache, request meter.

pub mod graphql_client;
pub mod request_meter;
pub mod response_cache;

pub use graphql_client::GraphqlClient;
pub use request_meter::RequestMeter;
pub use response_cache::ResponseCache;
