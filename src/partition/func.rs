//! Contiguous index-range chunking.

use std::ops::Range;

use crate::error::Error;

/// Split `len` indices into `chunk_count` contiguous half-open ranges.
///
/// Every chunk except the last holds `len / chunk_count` elements; the
/// last absorbs the remainder. Every index in `0..len` is covered exactly
/// once, so slicing by these ranges can neither drop nor duplicate a
/// boundary element.
pub fn chunk_ranges(len: usize, chunk_count: usize) -> Result<Vec<Range<usize>>, Error> {
    if chunk_count == 0 {
        return Err(Error::InvalidChunkCount);
    }

    let base = len / chunk_count;
    let mut ranges = Vec::with_capacity(chunk_count);
    for index in 0..chunk_count {
        let start = index * base;
        let end = if index + 1 == chunk_count {
            len
        } else {
            start + base
        };
        ranges.push(start..end);
    }

    Ok(ranges)
}
