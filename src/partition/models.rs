//! Merge seam and aggregate outcome of a partitioned run.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Error;

/// Combines a later partial result into an earlier one.
///
/// Implementations must keep the receiver's contents ahead of the
/// argument's, so folding partials in chunk order preserves chunk order
/// inside the merged value.
pub trait Merge {
    fn merge(&mut self, other: Self);
}

impl<T> Merge for Vec<T> {
    fn merge(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<K: Eq + Hash, V> Merge for HashMap<K, Vec<V>> {
    fn merge(&mut self, other: Self) {
        for (key, mut bucket) in other {
            self.entry(key).or_default().append(&mut bucket);
        }
    }
}

/// Why one chunk's contribution is missing from the merged value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkFailure {
    pub index: usize,
    pub reason: String,
}

/// The merged value of all surviving chunks, plus every failure observed.
///
/// A failed chunk never silently vanishes: it is listed here, and callers
/// that want all-or-nothing semantics use [`Outcome::into_result`].
#[derive(Debug)]
pub struct Outcome<R> {
    pub value: R,
    pub failures: Vec<ChunkFailure>,
    pub total_chunks: usize,
}

impl<R> Outcome<R> {
    /// Whether every chunk contributed to the merged value.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// All-or-nothing view: any chunk failure becomes an error.
    pub fn into_result(self) -> Result<R, Error> {
        if self.failures.is_empty() {
            Ok(self.value)
        } else {
            Err(Error::PartialFailure {
                failed: self.failures.len(),
                total: self.total_chunks,
            })
        }
    }
}
