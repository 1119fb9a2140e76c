//! Latency instrumentation for the harness binary.

mod operation;

pub use operation::{LatencyGuard, LatencyMeter};
