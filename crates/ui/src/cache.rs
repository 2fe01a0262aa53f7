//! Explicit query cache keyed by resource + parameters.
//!
//! Every server response the UI holds lives here, keyed by the resource name
//! plus the exact filter parameters that produced it. Mutations invalidate a
//! whole resource family, which forces the next read to refetch whatever
//! page/search is currently active. The cache never patches entries in
//! place, so local state cannot diverge from the server.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use citaflow_core::errors::BookingResult;

/// Identity of one cached query: a resource name plus its ordered
/// parameters, e.g. `["employees", "2", "ana", "9"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: String,
    params: Vec<String>,
}

impl QueryKey {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            params: Vec::new(),
        }
    }

    pub fn with(mut self, param: impl ToString) -> Self {
        self.params.push(param.to_string());
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }
}

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    inserted_at: Instant,
}

/// Thread-safe response cache. Lookups honor a per-call stale time so the
/// same entry can be "fresh enough" for the calendar (5 min) and already
/// stale for a list that always refetches.
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: Send + Sync + 'static>(
        &self,
        key: &QueryKey,
        stale_time: Duration,
    ) -> Option<Arc<T>> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        if entry.inserted_at.elapsed() > stale_time {
            return None;
        }
        entry.value.clone().downcast::<T>().ok()
    }

    pub fn insert<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut entries = self.lock();
        entries.insert(
            key,
            Entry {
                value: value.clone(),
                inserted_at: Instant::now(),
            },
        );
        value
    }

    /// Drops one exact entry.
    pub fn invalidate(&self, key: &QueryKey) {
        self.lock().remove(key);
    }

    /// Drops every entry of a resource, regardless of page/search/filters.
    pub fn invalidate_family(&self, resource: &str) {
        let mut entries = self.lock();
        entries.retain(|key, _| key.resource != resource);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Get-or-fetch: returns a cached value younger than `stale_time`, or
    /// runs `fetch` and caches its result. Errors are returned to the caller
    /// and never cached.
    pub async fn fetch_with<T, F, Fut>(
        &self,
        key: QueryKey,
        stale_time: Duration,
        fetch: F,
    ) -> BookingResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = BookingResult<T>>,
    {
        if let Some(cached) = self.get::<T>(&key, stale_time) {
            return Ok(cached);
        }
        let value = fetch().await?;
        Ok(self.insert(key, value))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
