use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::shared::record_values::RecordValues;

#[derive(Default)]
struct CacheEntry {
    rows: Option<Arc<Vec<RecordValues>>>,
    generation: u64,
}

/// List cache shared by all resources, keyed by resource cache key.
///
/// Entries are never patched: a mutation invalidates its key and the next read
/// goes back to the collaborator. Each key carries a generation counter that
/// `invalidate` bumps, so a fetch that started before an invalidation cannot
/// store its (possibly stale) result.
#[derive(Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, key: &str) -> Option<Arc<Vec<RecordValues>>> {
        self.read().get(key).and_then(|e| e.rows.clone())
    }

    pub fn generation(&self, key: &str) -> u64 {
        self.read().get(key).map(|e| e.generation).unwrap_or(0)
    }

    /// Store rows fetched while `generation` was current.
    ///
    /// Returns false (and stores nothing) if the key was invalidated meanwhile.
    pub fn store_if_current(
        &self,
        key: &str,
        generation: u64,
        rows: Vec<RecordValues>,
    ) -> bool {
        let mut entries = self.write();
        let entry = entries.entry(key.to_string()).or_default();
        if entry.generation != generation {
            return false;
        }
        entry.rows = Some(Arc::new(rows));
        true
    }

    /// Drop the cached list of `key`; the next read re-fetches
    pub fn invalidate(&self, key: &str) {
        let mut entries = self.write();
        let entry = entries.entry(key.to_string()).or_default();
        entry.rows = None;
        entry.generation += 1;
    }

    pub fn invalidate_all(&self) {
        for entry in self.write().values_mut() {
            entry.rows = None;
            entry.generation += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(code: &str) -> RecordValues {
        json!({ "code": code }).as_object().cloned().unwrap()
    }

    #[test]
    fn test_store_and_invalidate() {
        let cache = QueryCache::new();
        assert!(cache.get("master:countries").is_none());

        let gen = cache.generation("master:countries");
        assert!(cache.store_if_current("master:countries", gen, vec![row("in")]));
        assert_eq!(cache.get("master:countries").unwrap().len(), 1);

        cache.invalidate("master:countries");
        assert!(cache.get("master:countries").is_none());
        assert_eq!(cache.generation("master:countries"), gen + 1);
    }

    #[test]
    fn test_stale_fetch_is_not_stored() {
        let cache = QueryCache::new();
        let gen = cache.generation("k");
        cache.invalidate("k");
        assert!(!cache.store_if_current("k", gen, vec![row("old")]));
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = QueryCache::new();
        cache.store_if_current("a", 0, vec![row("a")]);
        cache.store_if_current("b", 0, vec![row("b")]);
        cache.invalidate("a");
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());

        cache.invalidate_all();
        assert!(cache.get("b").is_none());
    }
}
