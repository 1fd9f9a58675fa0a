//! In-memory repositories keyed by integer id.
//!
//! Entries live in a `DashMap`, so each single read or write is memory safe,
//! but compound operations are not serialized: `create` reads the current
//! maximum id and inserts in two separate steps. Two concurrent creates can
//! therefore compute the same id and the last insert wins. This is accepted
//! for a single-process teaching server; callers that need unique ids under
//! contention must serialize creates themselves.

use dashmap::DashMap;

use crate::error::{ExplorerError, Result};

/// A record stored in a [`Repository`]. The id is owned by the repository.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<u64>;
    fn set_id(&mut self, id: u64);
    /// Message used when `id` is not present.
    fn not_found(id: u64) -> String;
}

/// Ordered id → record mapping with `max + 1` id assignment.
#[derive(Debug)]
pub struct Repository<T> {
    entries: DashMap<u64, T>,
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> {
    pub fn new() -> Self {
        Self { entries: DashMap::new() }
    }

    /// Seed with fixture records. Records without an id get the next free one.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let repo = Self::new();
        for record in records {
            match record.id() {
                Some(id) => {
                    repo.entries.insert(id, record);
                }
                None => {
                    repo.create(record);
                }
            }
        }
        repo
    }

    /// All records in ascending id (= insertion) order.
    pub fn list(&self) -> Vec<T> {
        let mut all: Vec<(u64, T)> = self
            .entries
            .iter()
            .map(|e| (*e.key(), e.value().clone()))
            .collect();
        all.sort_by_key(|(id, _)| *id);
        all.into_iter().map(|(_, r)| r).collect()
    }

    pub fn get(&self, id: u64) -> Result<T> {
        self.entries
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| ExplorerError::NotFound(T::not_found(id)))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    /// Next id: highest stored id + 1, or 1 when empty.
    pub fn next_id(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| *e.key())
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Store `record` under a fresh id and return it with the id populated.
    pub fn create(&self, mut record: T) -> T {
        let id = self.next_id();
        record.set_id(id);
        self.entries.insert(id, record.clone());
        tracing::debug!(id, "record created");
        record
    }

    /// Overwrite every field of `id`. The stored id always matches the path id.
    pub fn replace(&self, id: u64, mut record: T) -> Result<T> {
        let mut slot = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| ExplorerError::NotFound(T::not_found(id)))?;
        record.set_id(id);
        *slot = record.clone();
        Ok(record)
    }

    /// Mutate the stored record in place and return the updated copy.
    pub fn patch<F>(&self, id: u64, apply: F) -> Result<T>
    where
        F: FnOnce(&mut T),
    {
        let mut slot = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| ExplorerError::NotFound(T::not_found(id)))?;
        apply(slot.value_mut());
        slot.value_mut().set_id(id);
        Ok(slot.value().clone())
    }

    /// Remove and return the record.
    pub fn delete(&self, id: u64) -> Result<T> {
        self.entries
            .remove(&id)
            .map(|(_, r)| r)
            .ok_or_else(|| ExplorerError::NotFound(T::not_found(id)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
