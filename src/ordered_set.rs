//! Comparator-ordered sequence with index access.
//!
//! `OrderedSet` keeps its elements in ascending order under a comparator
//! fixed at construction. Every scheduling policy reuses the same container
//! with a different comparator; a comparator that always reports
//! `Ordering::Equal` turns it into a plain FIFO, because inserts are stable.
//!
//! # Complexity
//! Insert is O(log n) to locate plus O(n) to shift; identity lookups are O(n).
//! Job and core counts in a simulation are small, so a `Vec` is the right
//! backing store.

use std::cmp::Ordering;
use std::fmt;

/// Comparison function used to rank elements.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Identity of an element, independent of its rank.
pub trait Keyed {
    /// Identity type.
    type Key: Eq;

    /// Returns the element's identity.
    fn key(&self) -> Self::Key;
}

/// A sequence kept sorted by a caller-supplied comparator.
pub struct OrderedSet<T> {
    items: Vec<T>,
    cmp: Comparator<T>,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set ranked by `cmp`.
    pub fn new<F>(cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            items: Vec::new(),
            cmp: Box::new(cmp),
        }
    }

    /// Inserts `item` at its sorted position and returns that index.
    ///
    /// Stable: the new element lands after every element it ranks equal to.
    pub fn insert(&mut self, item: T) -> usize {
        let index = self
            .items
            .partition_point(|existing| (self.cmp)(existing, &item) != Ordering::Greater);
        self.items.insert(index, item);
        index
    }

    /// Returns the first element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the first element.
    pub fn take_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Returns the element at `index`.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Removes and returns the element at `index`, shifting later elements up.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Applies `f` to the element at `index` and restores sort order.
    ///
    /// The element keeps its slot when it still ranks between its neighbours;
    /// otherwise it is re-inserted. Returns the element's index afterwards, or
    /// `None` if `index` is out of bounds.
    pub fn update<F>(&mut self, index: usize, f: F) -> Option<usize>
    where
        F: FnOnce(&mut T),
    {
        f(self.items.get_mut(index)?);

        if self.in_order(index) {
            return Some(index);
        }

        let item = self.items.remove(index);
        Some(self.insert(item))
    }

    /// Applies `f` to the element at `index` without re-ranking it.
    ///
    /// `f` must leave the element's rank unchanged. Returns `index`, or
    /// `None` if it is out of bounds.
    pub fn update_in_place<F>(&mut self, index: usize, f: F) -> Option<usize>
    where
        F: FnOnce(&mut T),
    {
        f(self.items.get_mut(index)?);
        debug_assert!(self.in_order(index), "rank changed by update_in_place");
        Some(index)
    }

    /// Whether the element at `index` still ranks between its neighbours.
    fn in_order(&self, index: usize) -> bool {
        let item = &self.items[index];
        let after_prev = index == 0
            || (self.cmp)(&self.items[index - 1], item) != Ordering::Greater;
        let before_next = index + 1 >= self.items.len()
            || (self.cmp)(item, &self.items[index + 1]) != Ordering::Greater;
        after_prev && before_next
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates elements in ranked order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Keyed> OrderedSet<T> {
    /// Index of the element with identity `key`.
    pub fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.key() == *key)
    }

    /// Removes and returns the first element with identity `key`.
    pub fn take(&mut self, key: &T::Key) -> Option<T> {
        let index = self.position(key)?;
        self.remove_at(index)
    }

    /// Removes every element with identity `key`; returns how many went.
    ///
    /// Matches by identity only, never through the comparator.
    pub fn remove(&mut self, key: &T::Key) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.key() != *key);
        before - self.items.len()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSet")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
