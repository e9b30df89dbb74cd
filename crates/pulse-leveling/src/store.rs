//! Config store abstraction
//!
//! Administrative load/save/reset of the leveling tables goes through
//! this seam. A stored snapshot, when present and valid, overrides the
//! built-in defaults wholesale; removing it reverts to defaults.

use dashmap::DashMap;
use serde_json::Value;

/// Key under which the leveling snapshot is stored
pub const LEVELING_CONFIG_KEY: &str = "leveling";

/// Storage seam for configuration snapshots
pub trait ConfigStore: Send + Sync {
    /// Fetch a stored snapshot
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a snapshot
    fn put(&self, key: &str, value: Value);

    /// Drop a snapshot; `true` if one existed
    fn remove(&self, key: &str) -> bool;
}

/// In-memory config store
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    entries: DashMap<String, Value>,
}

impl MemoryConfigStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|v| v.clone())
    }

    fn put(&self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_get_remove() {
        let store = MemoryConfigStore::new();
        assert!(store.get("k").is_none());

        store.put("k", json!({"a": 1}));
        assert_eq!(store.get("k").unwrap()["a"], 1);

        assert!(store.remove("k"));
        assert!(!store.remove("k"));
    }
}
