//! Query result cache shared by the components of one page.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cache key of the waitlist stats query, invalidated after a successful signup.
pub const WAITLIST_STATS_KEY: &str = "waitlist-stats";

type CachedValue = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
struct Entries {
    values: HashMap<String, CachedValue>,
    /// Bumped on every write or invalidation of a key. A fetch only stores
    /// its result if the key's generation is unchanged since it started.
    generations: HashMap<String, u64>,
    /// Bumped by `invalidate_all`.
    epoch: u64,
}

impl Entries {
    fn generation(&self, key: &str) -> u64 {
        self.epoch + self.generations.get(key).copied().unwrap_or(0)
    }

    fn bump(&mut self, key: &str) {
        *self.generations.entry(key.to_owned()).or_insert(0) += 1;
    }
}

/// Cache of fetched query results, keyed by query name.
///
/// Create one per page (or per test) and hand it to whoever reads or
/// mutates the data; there is no global instance.
#[derive(Default)]
pub struct QueryClient {
    entries: Mutex<Entries>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached value for `key`, if present and of type `T`.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let cached = self.entries().values.get(key).cloned()?;
        cached.downcast::<T>().ok()
    }

    pub fn set<T: Any + Send + Sync>(&self, key: &str, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut entries = self.entries();
        entries.bump(key);
        entries
            .values
            .insert(key.to_owned(), value.clone() as CachedValue);
        value
    }

    /// Return the cached value or run `fetch` and cache its success.
    ///
    /// Errors are not cached. A result is returned but not cached when `key`
    /// was invalidated or set while the fetch ran, so an invalidation always
    /// wins over a fetch that started before it.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, key: &str, fetch: F) -> Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get::<T>(key) {
            return Ok(hit);
        }

        let started_at = self.entries().generation(key);
        let value = Arc::new(fetch().await?);

        let mut entries = self.entries();
        if entries.generation(key) == started_at {
            entries.bump(key);
            entries
                .values
                .insert(key.to_owned(), value.clone() as CachedValue);
        } else {
            tracing::debug!(key, "Discarding result of a fetch that outlived an invalidation");
        }
        Ok(value)
    }

    /// Drop the cached value for `key`. Returns whether anything was cached.
    ///
    /// Fetches of `key` already running will not cache their result.
    pub fn invalidate(&self, key: &str) -> bool {
        let mut entries = self.entries();
        entries.bump(key);
        let removed = entries.values.remove(key).is_some();
        tracing::debug!(key, removed, "Query invalidated");
        removed
    }

    pub fn invalidate_all(&self) {
        let mut entries = self.entries();
        entries.epoch += 1;
        entries.values.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries().values.contains_key(key)
    }
}
