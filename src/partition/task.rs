//! Fan a record set out to the blocking worker pool and merge the partials.
//!
//! The shape is a one-shot scatter-gather: every chunk is an independent,
//! side-effect-free unit of work, no unit ever waits on another, and the
//! only synchronization point is the caller awaiting all handles.

use std::fmt::Display;
use std::sync::Arc;

use deadqueue::unlimited::Queue;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::func::chunk_ranges;
use super::models::{ChunkFailure, Merge, Outcome};
use crate::error::Error;
use crate::person::Person;

/// Run `work_fn` over `chunk_count` contiguous chunks of `records` on the
/// blocking pool, then merge the partial results in chunk order.
///
/// Workers push their partials into a shared queue as they finish, in
/// whatever order they complete; the merge sorts by chunk index before
/// folding, so completion order never leaks into the merged value.
///
/// A chunk whose work function errors or panics is recorded in the
/// outcome's failure list; the remaining chunks' contributions are still
/// merged. Callers decide whether that is fatal via
/// [`Outcome::into_result`].
pub async fn run<R, E, F>(
    records: Arc<Vec<Person>>,
    chunk_count: usize,
    work_fn: F,
) -> Result<Outcome<R>, Error>
where
    R: Merge + Default + Send + 'static,
    E: Display + Send + 'static,
    F: Fn(&[Person]) -> Result<R, E> + Send + Sync + 'static,
{
    let ranges = chunk_ranges(records.len(), chunk_count)?;
    let collector: Arc<Queue<(usize, R)>> = Arc::new(Queue::new());
    let work_fn = Arc::new(work_fn);

    let mut handles = Vec::with_capacity(ranges.len());
    for (index, range) in ranges.into_iter().enumerate() {
        let records = Arc::clone(&records);
        let collector = Arc::clone(&collector);
        let work_fn = Arc::clone(&work_fn);

        handles.push(tokio::task::spawn_blocking(move || {
            debug!(chunk = index, start = range.start, end = range.end, "chunk dispatched");

            work_fn(&records[range]).map(|partial| collector.push((index, partial)))
        }));
    }

    let total_chunks = handles.len();
    let mut failures = Vec::new();
    for (index, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                warn!(chunk = index, error = %error, "chunk work function failed");
                failures.push(ChunkFailure {
                    index,
                    reason: error.to_string(),
                });
            }
            Err(join_error) => {
                warn!(chunk = index, error = %join_error, "chunk worker panicked");
                failures.push(ChunkFailure {
                    index,
                    reason: join_error.to_string(),
                });
            }
        }
    }

    let mut partials = Vec::with_capacity(total_chunks - failures.len());
    while let Some(entry) = collector.try_pop() {
        partials.push(entry);
    }
    partials.sort_by_key(|(index, _)| *index);

    let mut value = R::default();
    for (_, partial) in partials {
        value.merge(partial);
    }

    Ok(Outcome {
        value,
        failures,
        total_chunks,
    })
}

/// Same as [`run`], but abandons the wait when `cancel` flips to `true`.
///
/// Chunks already dispatched keep running on the blocking pool; their
/// results are dropped with the collector. When the signal never fires
/// (or its sender is gone), behavior is identical to [`run`].
pub async fn run_with_cancel<R, E, F>(
    records: Arc<Vec<Person>>,
    chunk_count: usize,
    work_fn: F,
    mut cancel: watch::Receiver<bool>,
) -> Result<Outcome<R>, Error>
where
    R: Merge + Default + Send + 'static,
    E: Display + Send + 'static,
    F: Fn(&[Person]) -> Result<R, E> + Send + Sync + 'static,
{
    let inner = run(records, chunk_count, work_fn);
    tokio::pin!(inner);

    tokio::select! {
        outcome = &mut inner => outcome,
        changed = cancel.wait_for(|cancelled| *cancelled) => match changed {
            Ok(_) => Err(Error::Cancelled),
            // The sender is gone; nobody can cancel us any more.
            Err(_) => inner.await,
        }
    }
}
