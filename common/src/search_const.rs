//! Constants shared by the search and page data layers.

/// Result items per fetched search page.
pub const PAGE_SIZE: u64 = 15;

/// Revalidation deadline for wiki document pages (1 hour).
pub const REVALIDATE_WIKI_PAGE_SECS: u64 = 3600;

/// Revalidation deadline for browse listings: series index, year/season
/// pages (3 hours).
pub const REVALIDATE_BROWSE_SECS: u64 = 10800;
