//! In-memory execution store for tests
//!
//! Mirrors the Redis read semantics the pipeline relies on: missing keys and
//! fields read as absent, not as errors. Individual keys, fields, or the
//! enumeration itself can be made to fail to exercise error paths.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::errors::{StoreError, StoreResult};
use super::ExecutionStore;

/// In-memory hash store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    hashes: BTreeMap<String, HashMap<String, String>>,
    failing_keys: HashSet<String>,
    failing_fields: HashSet<(String, String)>,
    fail_enumeration: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a hash field, creating the hash if needed
    pub fn hset(&mut self, key: impl Into<String>, field: impl Into<String>, value: impl Into<String>) {
        self.hashes
            .entry(key.into())
            .or_default()
            .insert(field.into(), value.into());
    }

    /// Insert a whole hash
    pub fn insert_hash<K, V>(&mut self, key: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let hash = self.hashes.entry(key.into()).or_default();
        for (field, value) in fields {
            hash.insert(field.into(), value.into());
        }
    }

    /// Make every read against `key` fail
    pub fn fail_key(&mut self, key: impl Into<String>) {
        self.failing_keys.insert(key.into());
    }

    /// Make `hget` of one field fail
    pub fn fail_field(&mut self, key: impl Into<String>, field: impl Into<String>) {
        self.failing_fields.insert((key.into(), field.into()));
    }

    /// Make key enumeration fail
    pub fn fail_enumeration(&mut self) {
        self.fail_enumeration = true;
    }
}

impl ExecutionStore for MemoryStore {
    fn keys(&mut self, pattern: &str) -> StoreResult<Vec<String>> {
        if self.fail_enumeration {
            return Err(StoreError::command(
                format!("KEYS {}", pattern),
                "enumeration failure injected",
            ));
        }
        Ok(self
            .hashes
            .keys()
            .filter(|key| glob_match(pattern, key))
            .cloned()
            .collect())
    }

    fn hget(&mut self, key: &str, field: &str) -> StoreResult<Option<String>> {
        if self.failing_keys.contains(key)
            || self
                .failing_fields
                .contains(&(key.to_string(), field.to_string()))
        {
            return Err(StoreError::command(
                format!("HGET {} {}", key, field),
                "read failure injected",
            ));
        }
        Ok(self
            .hashes
            .get(key)
            .and_then(|hash| hash.get(field))
            .cloned())
    }

    fn hkeys(&mut self, key: &str) -> StoreResult<Vec<String>> {
        if self.failing_keys.contains(key) {
            return Err(StoreError::command(
                format!("HKEYS {}", key),
                "read failure injected",
            ));
        }
        Ok(self
            .hashes
            .get(key)
            .map(|hash| hash.keys().cloned().collect())
            .unwrap_or_default())
    }
}

/// Glob matching with `*` (any sequence) and `?` (any single character)
fn glob_match(pattern: &str, value: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let value: Vec<char> = value.chars().collect();

    let (mut p, mut v) = (0, 0);
    let mut star: Option<usize> = None;
    let mut star_v = 0;

    while v < value.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == value[v]) {
            p += 1;
            v += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            star_v = v;
            p += 1;
        } else if let Some(s) = star {
            // Backtrack: let the last star absorb one more character
            p = s + 1;
            star_v += 1;
            v = star_v;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("orchestration:*", "orchestration:1"));
        assert!(glob_match("orchestration:*", "orchestration:"));
        assert!(glob_match("*:stageIndex", "pipeline:1:stageIndex"));
        assert!(glob_match("pipeline:?", "pipeline:7"));
        assert!(glob_match("a*b*c", "axxbyyc"));
        assert!(!glob_match("orchestration:*", "pipeline:1"));
        assert!(!glob_match("pipeline:?", "pipeline:12"));
        assert!(!glob_match("a*b*c", "axxbyy"));
    }

    #[test]
    fn test_absent_reads_are_not_errors() {
        let mut store = MemoryStore::new();
        assert_eq!(store.hget("missing", "status").unwrap(), None);
        assert!(store.hkeys("missing").unwrap().is_empty());

        store.hset("orchestration:1", "status", "RUNNING");
        assert_eq!(store.hget("orchestration:1", "startTime").unwrap(), None);
        assert_eq!(
            store.hget("orchestration:1", "status").unwrap(),
            Some("RUNNING".to_string())
        );
    }

    #[test]
    fn test_keys_sorted_and_filtered() {
        let mut store = MemoryStore::new();
        store.hset("orchestration:2", "status", "RUNNING");
        store.hset("orchestration:1", "status", "RUNNING");
        store.hset("pipeline:1", "status", "RUNNING");

        assert_eq!(
            store.keys("orchestration:*").unwrap(),
            vec!["orchestration:1".to_string(), "orchestration:2".to_string()]
        );
    }

    #[test]
    fn test_injected_failures() {
        let mut store = MemoryStore::new();
        store.insert_hash("orchestration:1", [("status", "RUNNING"), ("owner", "ops")]);
        store.fail_field("orchestration:1", "owner");

        assert!(store.hget("orchestration:1", "status").is_ok());
        assert!(store.hget("orchestration:1", "owner").is_err());

        store.fail_key("orchestration:1");
        assert!(store.hget("orchestration:1", "status").is_err());
        assert!(store.hkeys("orchestration:1").is_err());

        store.fail_enumeration();
        assert!(store.keys("*").is_err());
    }
}
