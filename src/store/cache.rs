use super::DocumentStore;
use crate::errors::AppResult;
use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Memoizes counts per `(collection, date)` so repeated renders of the same
/// screen do not re-query. `invalidate` is the refresh action.
pub struct CachedStore<S> {
    inner: S,
    entries: RefCell<HashMap<(String, NaiveDate), u64>>,
    misses: Cell<u64>,
}

impl<S: DocumentStore> CachedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            entries: RefCell::new(HashMap::new()),
            misses: Cell::new(0),
        }
    }

    pub fn invalidate(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Number of queries that actually reached the backing store.
    pub fn backend_queries(&self) -> u64 {
        self.misses.get()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: DocumentStore> DocumentStore for CachedStore<S> {
    fn count_for_date(&self, collection: &str, date: NaiveDate) -> AppResult<u64> {
        let key = (collection.to_string(), date);
        if let Some(hit) = self.entries.borrow().get(&key) {
            log::debug!("cache hit for {collection} on {date}");
            return Ok(*hit);
        }

        self.misses.set(self.misses.get() + 1);
        let value = self.inner.count_for_date(collection, date)?;
        // errors are not cached
        self.entries.borrow_mut().insert(key, value);
        Ok(value)
    }
}
