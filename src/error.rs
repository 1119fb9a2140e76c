//! Error types for generation, vocabulary loading and partitioned runs.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A vocabulary list required for generation was empty. Selection
    /// indexes uniformly into the list, so an empty list can never be
    /// drawn from.
    #[error("vocabulary list `{0}` is empty")]
    EmptyVocabulary(&'static str),

    /// A vocabulary file could not be read. There is no degraded
    /// empty-list fallback; the caller sees the failure immediately.
    #[error("failed to read vocabulary file `{path}`")]
    VocabularyIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A partitioned run was requested with zero chunks.
    #[error("chunk count must be at least 1")]
    InvalidChunkCount,

    /// One or more chunks of a partitioned run failed. The merged value
    /// of the surviving chunks is still available on the [`Outcome`].
    ///
    /// [`Outcome`]: crate::partition::Outcome
    #[error("{failed} of {total} chunks failed")]
    PartialFailure { failed: usize, total: usize },

    /// The cancellation signal fired before all chunks completed.
    #[error("partitioned run was cancelled")]
    Cancelled,
}
