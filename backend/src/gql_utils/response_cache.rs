use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

const RESPONSE_TTL_SECS: i64 = 300;
const MAX_ENTRIES: usize = 512;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    expires_at: DateTime<Utc>,
}

/// Explicit request-deduplication cache for raw GraphQL response bodies,
/// keyed by a hash of (query document, variables). Owned by the caller and
/// passed into the client; invalidation is an explicit operation, never
/// ambient. Entries expire after a short TTL and the map is capped, so
/// search traffic can neither pin stale results nor grow it without bound.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<BTreeMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;
        if entry.expires_at <= now {
            return None;
        }
        Some(entry.body.clone())
    }

    pub fn insert(&self, key: String, body: String, now: DateTime<Utc>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|_, entry| entry.expires_at > now);
            while entries.len() >= MAX_ENTRIES {
                entries.pop_first();
            }
            let expires_at = now + Duration::seconds(RESPONSE_TTL_SECS);
            entries.insert(key, CacheEntry { body, expires_at });
        }
    }

    /// Drops every cached response. Returns the number of entries dropped.
    pub fn invalidate_all(&self) -> usize {
        match self.entries.lock() {
            Ok(mut entries) => {
                let count = entries.len();
                entries.clear();
                count
            }
            Err(_) => 0,
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
    fn insert_then_get_roundtrips() {
        let cache = ResponseCache::new();
        assert_eq!(cache.get("k", now()), None);
        cache.insert("k".to_string(), "body".to_string(), now());
        assert_eq!(cache.get("k", now()).as_deref(), Some("body"));
    }

    #[test]
    fn expired_entries_miss() {
        let cache = ResponseCache::new();
        cache.insert("k".to_string(), "body".to_string(), now());
        let last_valid = now() + Duration::seconds(RESPONSE_TTL_SECS - 1);
        assert!(cache.get("k", last_valid).is_some());
        assert!(cache.get("k", now() + Duration::seconds(RESPONSE_TTL_SECS)).is_none());
    }

    #[test]
    fn entry_count_is_capped() {
        let cache = ResponseCache::new();
        for i in 0..MAX_ENTRIES + 50 {
            cache.insert(format!("key-{i:04}"), "body".to_string(), now());
        }
        assert_eq!(cache.invalidate_all(), MAX_ENTRIES);
    }

    #[test]
    fn invalidate_all_drops_entries() {
        let cache = ResponseCache::new();
        cache.insert("a".to_string(), "1".to_string(), now());
        cache.insert("b".to_string(), "2".to_string(), now());
        assert_eq!(cache.invalidate_all(), 2);
        assert_eq!(cache.get("a", now()), None);
    }
}
