use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::errors::CoreError;

use super::lock;

/// Resource type a cached read depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceTag {
    Property,
    Portfolio,
    PortfolioList,
    Analysis,
    User,
    Subscription,
    Tier,
    Payment,
    Usage,
    Feedback,
    Support,
    Contact,
}

/// Identifier part of a tag. `Default` addresses the user's default portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagId {
    Id(u64),
    Default,
}

/// `(resource, id)` pair attached to cache entries and used for invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub resource: ResourceTag,
    pub id: Option<TagId>,
}

impl Tag {
    /// Every entry of `resource`.
    pub fn all(resource: ResourceTag) -> Self {
        Self { resource, id: None }
    }

    pub fn id(resource: ResourceTag, id: u64) -> Self {
        Self {
            resource,
            id: Some(TagId::Id(id)),
        }
    }

    pub fn default_of(resource: ResourceTag) -> Self {
        Self {
            resource,
            id: Some(TagId::Default),
        }
    }

    /// Whether invalidating `self` affects an entry tagged with `provided`.
    fn covers(&self, provided: &Tag) -> bool {
        if self.resource != provided.resource {
            return false;
        }
        match self.id {
            None => true,
            Some(id) => provided.id == Some(id),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            None => write!(f, "{:?}", self.resource),
            Some(TagId::Id(id)) => write!(f, "{:?}:{id}", self.resource),
            Some(TagId::Default) => write!(f, "{:?}:default", self.resource),
        }
    }
}

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    tags: Vec<Tag>,
    fetched_at: DateTime<Utc>,
    stale: bool,
}

/// Read cache shared by every API module.
///
/// Entries are keyed by request (path plus query string) and tagged with the
/// resources they depend on. Mutations mark matching entries stale; the next
/// read of a stale key goes back to the server. Concurrent reads of one key
/// share a single fetch.
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, Entry>>,
    in_flight: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
    /// Bumped on every invalidation so a fetch that raced one is stored stale.
    epoch: AtomicU64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the fresh cached value for `key`, or run `fetch` and cache its
    /// success. Failures are returned unchanged and never cached.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, tags: Vec<Tag>, fetch: F) -> Result<T, CoreError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        if let Some(hit) = self.fresh_value::<T>(key) {
            tracing::debug!(key, "cache hit");
            return Ok(hit);
        }

        let in_flight = self.gate(key);
        let _guard = in_flight.gate.lock().await;

        // Another caller may have filled the entry while we waited.
        if let Some(hit) = self.fresh_value::<T>(key) {
            tracing::debug!(key, "cache hit after wait");
            return Ok(hit);
        }

        tracing::debug!(key, "cache miss");
        let started = self.epoch.load(Ordering::SeqCst);
        let value = fetch().await?;
        let stale = self.epoch.load(Ordering::SeqCst) != started;

        lock(&self.entries).insert(
            key.to_string(),
            Entry {
                value: Arc::new(value.clone()),
                tags,
                fetched_at: Utc::now(),
                stale,
            },
        );
        Ok(value)
    }

    /// Mark every entry covered by one of `tags` stale. Returns how many
    /// entries changed state.
    pub fn invalidate(&self, tags: &[Tag]) -> usize {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let mut entries = lock(&self.entries);
        let mut count = 0;
        for entry in entries.values_mut() {
            if entry.stale {
                continue;
            }
            if tags.iter().any(|t| entry.tags.iter().any(|p| t.covers(p))) {
                entry.stale = true;
                count += 1;
            }
        }
        if count > 0 {
            let names: Vec<String> = tags.iter().map(Tag::to_string).collect();
            tracing::debug!(tags = ?names, count, "cache invalidated");
        }
        count
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        lock(&self.entries).clear();
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    pub fn is_fresh(&self, key: &str) -> bool {
        lock(&self.entries).get(key).is_some_and(|e| !e.stale)
    }

    /// When the entry for `key` was last fetched.
    pub fn fetched_at(&self, key: &str) -> Option<DateTime<Utc>> {
        lock(&self.entries).get(key).map(|e| e.fetched_at)
    }

    fn fresh_value<T: Clone + 'static>(&self, key: &str) -> Option<T> {
        let entries = lock(&self.entries);
        let entry = entries.get(key).filter(|e| !e.stale)?;
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Number of keys with a fetch running or queued.
    pub fn pending_keys(&self) -> usize {
        lock(&self.in_flight).len()
    }

    fn gate<'a>(&'a self, key: &'a str) -> InFlight<'a> {
        let gate = lock(&self.in_flight)
            .entry(key.to_string())
            .or_default()
            .clone();
        InFlight {
            cache: self,
            key,
            gate,
        }
    }
}

/// Per-key fetch gate, dropped from the map by its last holder.
struct InFlight<'a> {
    cache: &'a QueryCache,
    key: &'a str,
    gate: Arc<tokio::sync::Mutex<()>>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut gates = lock(&self.cache.in_flight);
        // One reference in the map plus ours: nobody else is queued.
        let ours = gates
            .get(self.key)
            .is_some_and(|g| Arc::ptr_eq(g, &self.gate));
        if ours && Arc::strong_count(&self.gate) <= 2 {
            gates.remove(self.key);
        }
    }
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache").field("entries", &self.len()).finish()
    }
}
