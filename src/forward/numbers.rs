//! Sorted, duplicate-free list of numbers
//!
//! Used both as the result of `get`/`reverse` and as the per-node set of
//! sources stored in the reverse trie.

use std::fmt;

use crate::errors::{PhoneForwardError, Result};

/// An ordered sequence of numbers, strictly increasing lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumbers {
    numbers: Vec<String>,
}

impl PhoneNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding exactly one number.
    pub fn single(num: String) -> Self {
        Self { numbers: vec![num] }
    }

    /// Allocate an empty list with room for one entry, reporting allocation
    /// failure instead of aborting.
    pub(crate) fn try_with_slot() -> Result<Self> {
        let mut numbers = Vec::new();
        numbers
            .try_reserve(1)
            .map_err(|e| PhoneForwardError::resource_exhausted(e.to_string()))?;
        Ok(Self { numbers })
    }

    /// Number at position `idx`, or `None` past the end.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.numbers.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.numbers.iter().map(String::as_str)
    }

    pub fn contains(&self, num: &str) -> bool {
        self.position(num).is_ok()
    }

    /// Insert `num` keeping the list sorted. Returns `false` (and drops `num`)
    /// if it was already present.
    pub fn insert(&mut self, num: String) -> bool {
        match self.position(&num) {
            Ok(_) => false,
            Err(idx) => {
                self.numbers.insert(idx, num);
                true
            }
        }
    }

    /// Remove `num`. Returns whether it was present.
    pub fn remove(&mut self, num: &str) -> bool {
        match self.position(num) {
            Ok(idx) => {
                self.numbers.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Make sure the next `insert` will not need to grow the buffer.
    pub(crate) fn try_reserve_one(&mut self) -> Result<()> {
        self.numbers
            .try_reserve(1)
            .map_err(|e| PhoneForwardError::resource_exhausted(e.to_string()))
    }

    pub fn into_vec(self) -> Vec<String> {
        self.numbers
    }

    fn position(&self, num: &str) -> std::result::Result<usize, usize> {
        self.numbers.binary_search_by(|probe| probe.as_str().cmp(num))
    }
}

impl fmt::Display for PhoneNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for num in &self.numbers {
            writeln!(f, "{}", num)?;
        }
        Ok(())
    }
}

impl IntoIterator for PhoneNumbers {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.into_iter()
    }
}

impl<'a> IntoIterator for &'a PhoneNumbers {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}
