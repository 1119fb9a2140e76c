//! Wall-time accumulation for repeated strategy invocations.

use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc,
};
use std::time::Instant;

/// Accumulates the wall time of repeated invocations of one operation.
///
/// Each invocation is bracketed by a [`LatencyGuard`] obtained from
/// [`LatencyMeter::start`]; dropping the guard adds the elapsed time to
/// the meter. The counters are atomics, so guards may be held on several
/// threads at once and the totals stay cumulative.
///
/// The harness reads back the invocation count, the total, the maximum
/// and the per-invocation average in nanoseconds.
///
/// # Limitations
/// Resolution is one nanosecond; an invocation faster than that rounds
/// down to zero. The total overflows after 2^64 nanoseconds.
#[derive(Debug)]
pub struct LatencyMeter {
    name: String,
    ns: AtomicU64,
    max: AtomicU64,
    count: AtomicUsize,
}

impl LatencyMeter {
    pub fn new(name: impl AsRef<str>) -> Arc<Self> {
        Arc::new(Self {
            name: name.as_ref().to_string(),
            ns: AtomicU64::default(),
            max: AtomicU64::default(),
            count: AtomicUsize::default(),
        })
    }

    /// Start measuring one invocation.
    ///
    /// The measurement is submitted when the guard goes out of scope.
    pub fn start(self: &Arc<Self>) -> LatencyGuard {
        LatencyGuard {
            meter: Arc::clone(self),
            start: Instant::now(),
        }
    }

    /// Number of completed invocations.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Total nanoseconds across all completed invocations.
    pub fn total_ns(&self) -> u64 {
        self.ns.load(Ordering::Relaxed)
    }

    /// Slowest single invocation in nanoseconds.
    pub fn max_ns(&self) -> u64 {
        self.max.load(Ordering::Relaxed)
    }

    /// Average nanoseconds per invocation, or zero before the first one.
    pub fn avg_ns(&self) -> u64 {
        let count = self.count();
        if count == 0 {
            0
        } else {
            self.total_ns() / count as u64
        }
    }

    /// Print the accumulated figures to stdout.
    pub fn report(&self) {
        println!(
            "{}: {} invocations, avg {} ns/op, max {} ns, total {:?}",
            self.name,
            self.count(),
            self.avg_ns(),
            self.max_ns(),
            std::time::Duration::from_nanos(self.total_ns()),
        );
    }
}

/// A single in-flight measurement linked to a [`LatencyMeter`].
///
/// Dropping the guard adds the elapsed time to the meter.
pub struct LatencyGuard {
    meter: Arc<LatencyMeter>,
    start: Instant,
}

impl Drop for LatencyGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_nanos() as u64;
        self.meter.ns.fetch_add(elapsed, Ordering::Relaxed);
        self.meter.max.fetch_max(elapsed, Ordering::Relaxed);
        self.meter.count.fetch_add(1, Ordering::Relaxed);
    }
}
