//! Error taxonomy of the data layer.

/// Failures surfaced by the data layer. `Network` and `Query` both render as
/// a generic error display in the frontend; `NotFound` propagates as a
/// route-level not-found outcome instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("network error reaching the data service: {0}")]
    Network(String),

    #[error("data service rejected the query: {0}")]
    Query(String),

    #[error("not found")]
    NotFound,
}

impl DataError {
    /// HTTP status the server fn boundary reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            DataError::Network(_) => 502,
            DataError::Query(_) => 400,
            DataError::NotFound => 404,
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::Network(err.to_string())
    }
}
