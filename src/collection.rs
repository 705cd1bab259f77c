//! Insertion-ordered growable storage for scene objects and lights.

use log::debug;
use std::slice;

use crate::error::{Error, Result};

/// A growable sequence that doubles its capacity when full and reports
/// allocation failure instead of aborting.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    initial_capacity: usize,
    name: &'static str,
}

impl<T> Collection<T> {
    /// An empty collection. No storage is reserved until the first `add`,
    /// which reserves `initial_capacity` slots.
    pub fn new(name: &'static str, initial_capacity: usize) -> Collection<T> {
        Collection {
            items: Vec::new(),
            initial_capacity: initial_capacity.max(1),
            name,
        }
    }

    /// Appends `item`, growing the storage geometrically when it is full.
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.items.len() == self.items.capacity() {
            let target = if self.items.capacity() == 0 {
                self.initial_capacity
            } else {
                self.items.capacity() * 2
            };
            self.items
                .try_reserve_exact(target - self.items.len())
                .map_err(|source| Error::Allocation {
                    collection: self.name,
                    source,
                })?;
            debug!("grew {} collection to capacity {}", self.name, self.items.capacity());
        }
        self.items.push(item);
        Ok(())
    }

    /// The item at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Releases the backing storage. Safe to call repeatedly.
    pub fn free(&mut self) {
        self.items = Vec::new();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
