//! In-memory response cache for the GraphQL client.

use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;

/// Cache key derived from a GraphQL operation.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    /// Build a key from the query text, operation name and variables.
    #[must_use]
    pub fn new(query: &str, operation_name: Option<&str>, variables: Option<&Value>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(format!(
            "query:{}|op:{:?}|vars:{}",
            query.trim(),
            operation_name,
            variables.map(Value::to_string).unwrap_or_default()
        ));
        Self(format!("{:x}", hasher.finalize()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Process-lifetime cache of response payloads, keyed by operation.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<CacheKey, Value>>,
}

impl InMemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached `data` payload for a key, if present.
    pub fn get(&self, key: &CacheKey) -> Option<Value> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Store a `data` payload.
    pub fn put(&self, key: CacheKey, data: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, data);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_is_stable_and_sensitive_to_variables() {
        let vars = json!({"id": 1});
        let a = CacheKey::new("{ roles { id } }", None, Some(&vars));
        let b = CacheKey::new("  { roles { id } }\n", None, Some(&vars));
        let c = CacheKey::new("{ roles { id } }", None, Some(&json!({"id": 2})));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn test_put_get_clear() {
        let cache = InMemoryCache::new();
        assert!(cache.is_empty());

        let key = CacheKey::new("{ teams { name } }", Some("Teams"), None);
        cache.put(key.clone(), json!({"teams": []}));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key), Some(json!({"teams": []})));

        cache.clear();
        assert!(cache.get(&key).is_none());
    }
}
