//! Manual fan-out of a record set to a worker pool.

pub mod func;

pub mod models;

pub mod task;

pub use models::{ChunkFailure, Merge, Outcome};
