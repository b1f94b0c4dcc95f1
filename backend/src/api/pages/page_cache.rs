use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: Value,
    expires_at: DateTime<Utc>,
}

/// Cache of resolved page props, keyed by route path. Entries past their
/// revalidation deadline are treated as absent, which makes the next lookup
/// re-resolve the page. Invalidation is explicit, via [`PageCache::invalidate`]
/// and the revalidation endpoint.
#[derive(Debug, Default)]
pub struct PageCache {
    entries: Mutex<BTreeMap<String, CacheEntry>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, path: &str, now: DateTime<Utc>) -> Option<Value> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(path)?;
        if entry.expires_at <= now {
            return None;
        }
        Some(entry.body.clone())
    }

    pub fn store(&self, path: &str, body: Value, revalidate_secs: u64, now: DateTime<Utc>) {
        let expires_at = now + Duration::seconds(revalidate_secs as i64);
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(path.to_string(), CacheEntry { body, expires_at });
        }
    }

    /// Drops one cached page. Returns whether anything was dropped.
    pub fn invalidate(&self, path: &str) -> bool {
        match self.entries.lock() {
            Ok(mut entries) => entries.remove(path).is_some(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2024-05-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn lookup_before_deadline_hits() {
        let cache = PageCache::new();
        cache.store("/wiki/about", serde_json::json!({"name": "About"}), 3600, now());
        let hit = cache.lookup("/wiki/about", now() + Duration::seconds(3599));
        assert_eq!(hit.unwrap()["name"], "About");
    }

    #[test]
    fn lookup_past_deadline_misses() {
        let cache = PageCache::new();
        cache.store("/wiki/about", serde_json::json!({}), 3600, now());
        assert!(cache.lookup("/wiki/about", now() + Duration::seconds(3600)).is_none());
    }

    #[test]
    fn invalidate_reports_whether_entry_existed() {
        let cache = PageCache::new();
        cache.store("/series", serde_json::json!({}), 10800, now());
        assert!(cache.invalidate("/series"));
        assert!(!cache.invalidate("/series"));
        assert!(cache.lookup("/series", now()).is_none());
    }
}
