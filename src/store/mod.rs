//! Read path against the external document database.
//!
//! The only question this client ever asks is "how many documents of a
//! collection carry a given date". A collection that does not exist simply
//! counts zero; any failure to ask is an error.

pub mod cache;
pub mod firestore;

pub use cache::CachedStore;
pub use firestore::FirestoreStore;

use crate::errors::AppResult;
use chrono::NaiveDate;

pub trait DocumentStore {
    /// Number of documents in `collection` whose `date` field equals `date`.
    /// A collection never written to yields `Ok(0)`.
    fn count_for_date(&self, collection: &str, date: NaiveDate) -> AppResult<u64>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn count_for_date(&self, collection: &str, date: NaiveDate) -> AppResult<u64> {
        (**self).count_for_date(collection, date)
    }
}
