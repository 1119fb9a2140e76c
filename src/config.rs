//! Shared constants for generation, the strategies and the harness.

/// Ages are drawn from `0..AGE_BOUND`.
pub const AGE_BOUND: u8 = 100;

/// Salaries are drawn as integers from `0..SALARY_BOUND`.
pub const SALARY_BOUND: u32 = 6_000;

pub const DEFAULT_SALARY_THRESHOLD: f64 = 3_000.0;

pub const DEFAULT_CHUNK_COUNT: usize = 4;

/// Record-set sizes the harness and the benches sweep over.
pub const RECORD_SET_SIZES: [usize; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];
