//! Session-persisted filter state, keyed per search surface.
//!
//! Each surface owns one record of named option values. The record is
//! initialized from the surface's defaults on first access, restored from the
//! browser session store on return visits, and updated field-by-field via a
//! partial merge.

use std::collections::BTreeMap;

use dioxus::prelude::*;

pub type FilterRecord = BTreeMap<String, Option<String>>;

/// Partial merge: only the named field changes, all other fields keep their
/// prior values.
pub fn merge_field(record: &FilterRecord, field: &str, value: Option<String>) -> FilterRecord {
    let mut next = record.clone();
    next.insert(field.to_string(), value);
    next
}

/// Stored values win over defaults; fields absent from the stored record fall
/// back to their defaults.
pub fn load_record(storage_key: &str, defaults: FilterRecord) -> FilterRecord {
    let Some(raw) = session_store::get(storage_key) else {
        return defaults;
    };
    let Ok(stored) = serde_json::from_str::<FilterRecord>(&raw) else {
        return defaults;
    };
    let mut record = defaults;
    record.extend(stored);
    record
}

pub fn save_record(storage_key: &str, record: &FilterRecord) {
    match serde_json::to_string(record) {
        Ok(raw) => session_store::set(storage_key, &raw),
        Err(e) => dioxus::logger::tracing::error!("filter store: serialize failed: {e}"),
    }
}

#[derive(Clone, Copy)]
pub struct FilterStoreHandle {
    pub record: Signal<FilterRecord>,
    /// Setter bound to a field name: `(field, value)` merges one field and
    /// persists the result.
    pub update_field: Callback<(String, Option<String>)>,
}

impl FilterStoreHandle {
    pub fn value(&self, field: &str) -> Option<String> {
        self.record.read().get(field).cloned().flatten()
    }
}

pub fn use_filter_store(storage_key: &'static str, defaults: FilterRecord) -> FilterStoreHandle {
    let record = use_signal(move || load_record(storage_key, defaults.clone()));
    let update_field = Callback::new(move |(field, value): (String, Option<String>)| {
        let mut record = record;
        let next = merge_field(&record.peek(), &field, value);
        save_record(storage_key, &next);
        record.set(next);
    });
    FilterStoreHandle {
        record,
        update_field,
    }
}

/// Key-value session store collaborator. In the browser this is
/// `window.sessionStorage`; elsewhere (server render, tests) a process-local
/// map stands in.
mod session_store {
    #[cfg(target_arch = "wasm32")]
    pub fn get(key: &str) -> Option<String> {
        let storage = web_sys::window()?.session_storage().ok()??;
        storage.get_item(key).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    pub fn set(key: &str, value: &str) {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if let Some(storage) = storage {
            let _ = storage.set_item(key, value);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn fallback() -> &'static std::sync::Mutex<std::collections::BTreeMap<String, String>> {
        static FALLBACK: std::sync::OnceLock<
            std::sync::Mutex<std::collections::BTreeMap<String, String>>,
        > = std::sync::OnceLock::new();
        FALLBACK.get_or_init(Default::default)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn get(key: &str) -> Option<String> {
        fallback().lock().ok()?.get(key).cloned()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn set(key: &str, value: &str) {
        if let Ok(mut map) = fallback().lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> FilterRecord {
        FilterRecord::from([
            ("firstLetter".to_string(), None),
            ("sortBy".to_string(), Some("name".to_string())),
        ])
    }

    #[test]
    fn merge_changes_only_the_named_field() {
        let record = defaults();
        let next = merge_field(&record, "firstLetter", Some("G".to_string()));
        assert_eq!(next["firstLetter"], Some("G".to_string()));
        assert_eq!(next["sortBy"], Some("name".to_string()));
        // original untouched
        assert_eq!(record["firstLetter"], None);
    }

    #[test]
    fn first_access_uses_defaults() {
        let record = load_record("filter-test-fresh", defaults());
        assert_eq!(record, defaults());
    }

    #[test]
    fn saved_values_survive_reload_and_win_over_defaults() {
        let key = "filter-test-roundtrip";
        let mut record = defaults();
        record.insert("sortBy".to_string(), Some("-name".to_string()));
        save_record(key, &record);

        let restored = load_record(key, defaults());
        assert_eq!(restored["sortBy"], Some("-name".to_string()));
        assert_eq!(restored["firstLetter"], None);
    }

    #[test]
    fn corrupt_stored_record_falls_back_to_defaults() {
        let key = "filter-test-corrupt";
        super::session_store::set(key, "not json");
        assert_eq!(load_record(key, defaults()), defaults());
    }
}
