//! Shared page metadata attached to every resolved static page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// Metadata every statically resolved page carries for the rendering shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedPageProps {
    /// Timestamp of the resolution that produced this page.
    pub last_build_at: DateTime<Utc>,
    /// Number of backend API requests issued while resolving the page query.
    pub api_requests: u32,
}

/// Props bundle of a successfully resolved page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBundle<T> {
    pub props: T,
    pub shared: SharedPageProps,
    /// Seconds after which the cached page is eligible for background
    /// regeneration.
    pub revalidate_secs: u64,
}

/// Route-level outcome of a page data resolution. A missing required entity
/// resolves as `NotFound` rather than erroring; no shared metadata bundle is
/// attached in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageResolution<T> {
    Found(PageBundle<T>),
    NotFound,
}

impl<T> PageResolution<T> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageResolution::NotFound)
    }
}
