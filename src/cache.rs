// src/cache.rs
// =============================================================================
// In-process memoization for the fetch pipeline.
//
// Each fetcher owns one Cache instance and resolves every lookup through
// get_or_fetch: the fetch closure runs only on the first request for a key,
// and the stored value is returned for the rest of the process lifetime.
// Entries are never evicted. A failed fetch stores nothing, so the next
// request for the same key retries.
// =============================================================================

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;

use anyhow::Result;

pub struct Cache<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }

    // Returns the cached value for `key`, or runs `fetch` once and stores
    // its result. The fetch future is never constructed on a hit.
    pub async fn get_or_fetch<F, Fut>(&mut self, key: K, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.map.get(&key) {
            tracing::debug!(?key, "cache hit");
            return Ok(value.clone());
        }

        tracing::debug!(?key, "cache miss, fetching");
        let value = fetch().await?;
        self.map.insert(key, value.clone());
        Ok(value)
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_runs_once_per_key() {
        let mut cache: Cache<String, i32> = Cache::new();
        let mut calls = 0;

        let first = cache
            .get_or_fetch("a".to_string(), || {
                calls += 1;
                async { anyhow::Ok(7) }
            })
            .await
            .unwrap();

        let second = cache
            .get_or_fetch("a".to_string(), || {
                calls += 1;
                async { anyhow::Ok(99) }
            })
            .await
            .unwrap();

        assert_eq!(first, 7);
        assert_eq!(second, 7);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_fetch_separately() {
        let mut cache: Cache<String, i32> = Cache::new();

        let a = cache
            .get_or_fetch("a".to_string(), || async { anyhow::Ok(1) })
            .await
            .unwrap();
        let b = cache
            .get_or_fetch("b".to_string(), || async { anyhow::Ok(2) })
            .await
            .unwrap();

        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let mut cache: Cache<String, i32> = Cache::new();

        let failed = cache
            .get_or_fetch("a".to_string(), || async {
                Err(anyhow::anyhow!("transport down"))
            })
            .await;
        assert!(failed.is_err());

        // the key is still fetchable after a failure
        let retried = cache
            .get_or_fetch("a".to_string(), || async { anyhow::Ok(3) })
            .await
            .unwrap();
        assert_eq!(retried, 3);
    }
}
