pub mod config;
pub mod error;
pub mod partition;
pub mod person;
pub mod strategy;
pub mod vocab;

#[cfg(feature = "timed")]
pub mod timed;

pub use error::Error;

use clap::Parser;

/// Command line arguments for the walkthrough binary.
#[derive(Parser, Debug)]
#[command(about = "Walk through the filtering, grouping and manual-partitioning strategies")]
pub struct CliArgs {
    /// Newline-delimited name vocabulary.
    #[arg(long, default_value = "resources/names.txt")]
    pub names: String,

    /// Newline-delimited street vocabulary.
    #[arg(long, default_value = "resources/streets.txt")]
    pub streets: String,

    /// Newline-delimited occupation vocabulary.
    #[arg(long, default_value = "resources/occupations.txt")]
    pub occupations: String,

    /// Number of records to generate.
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    pub count: usize,

    /// Salary threshold for the filter strategies.
    #[arg(short, long, default_value_t = config::DEFAULT_SALARY_THRESHOLD)]
    pub threshold: f64,

    /// Number of chunks for the manual partitioner.
    #[arg(short, long, default_value_t = config::DEFAULT_CHUNK_COUNT)]
    pub chunks: usize,

    /// RNG seed; generation is entropy-seeded when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}
