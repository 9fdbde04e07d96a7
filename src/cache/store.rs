//! Cache Store Module
//!
//! The key-value capability the proxy caches upstream results in, and its
//! in-memory backing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::CacheEntry;
use crate::error::Result;

// == Result Store ==
/// Storage for upstream results keyed by the raw target URL.
///
/// Stores never judge freshness; callers compare `stored_at` against
/// their own TTL. Entries are only ever overwritten, never removed.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Returns the entry for `key`, stale or not.
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>>;

    /// Inserts or overwrites the entry for `key`.
    async fn put(&self, key: String, entry: CacheEntry) -> Result<()>;

    /// Number of stored entries, stale ones included.
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

// == Memory Store ==
/// Process-local store for single-instance deployments.
///
/// Concurrent writers to the same key resolve last-write-wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: String, entry: CacheEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key, entry);
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_store_new() {
        let store = MemoryStore::new();
        assert_eq!(store.len().await.unwrap(), 0);
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_store_put_and_get() {
        let store = MemoryStore::new();
        let entry = CacheEntry::new(json!({ "green": true }), Utc::now());

        store
            .put("https://example.com".to_string(), entry.clone())
            .await
            .unwrap();

        let found = store.get("https://example.com").await.unwrap();
        assert_eq!(found, Some(entry));
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_store_get_nonexistent() {
        let store = MemoryStore::new();
        assert!(store.get("https://missing.example").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_keys_are_verbatim() {
        let store = MemoryStore::new();
        store
            .put(
                "https://example.com".to_string(),
                CacheEntry::new(json!({}), Utc::now()),
            )
            .await
            .unwrap();

        assert!(store.get("https://example.com/").await.unwrap().is_none());
        assert!(store.get("https://Example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_overwrite() {
        let store = MemoryStore::new();
        let key = "https://example.com".to_string();

        store
            .put(key.clone(), CacheEntry::new(json!({ "bytes": 1 }), Utc::now()))
            .await
            .unwrap();
        store
            .put(key.clone(), CacheEntry::new(json!({ "bytes": 2 }), Utc::now()))
            .await
            .unwrap();

        let found = store.get(&key).await.unwrap().unwrap();
        assert_eq!(found.value, json!({ "bytes": 2 }));
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_store_concurrent_writers() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let key = format!("https://site{}.example", i % 4);
                store
                    .put(key, CacheEntry::new(json!({ "writer": i }), Utc::now()))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await.unwrap(), 4);
    }
}
