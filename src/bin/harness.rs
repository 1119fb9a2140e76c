//! Average-latency harness over the six strategy operations.
//!
//! Picks a record-set size from the fixed table, repeatedly invokes one
//! strategy over a freshly generated set, and reports the average
//! latency per invocation in nanoseconds. Generation happens outside the
//! timed window, with a per-round seed so every invocation sees a
//! different set of the same size.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cohort::config;
use cohort::error::Error;
use cohort::person::{self, Person};
use cohort::strategy::{filter, group};
use cohort::timed::LatencyMeter;
use cohort::vocab::Vocabulary;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    FilterLoop,
    FilterSequential,
    FilterParallel,
    GroupLoop,
    GroupSequential,
    GroupParallel,
}

impl Op {
    fn label(self) -> &'static str {
        match self {
            Op::FilterLoop => "filter_by_salary_loop",
            Op::FilterSequential => "filter_by_salary_sequential",
            Op::FilterParallel => "filter_by_salary_parallel",
            Op::GroupLoop => "group_by_age_loop",
            Op::GroupSequential => "group_by_age_sequential",
            Op::GroupParallel => "group_by_age_parallel",
        }
    }

    fn invoke(self, persons: &[Person], threshold: f64) {
        match self {
            Op::FilterLoop => {
                filter::filter_by_salary_loop(persons, threshold);
            }
            Op::FilterSequential => {
                filter::filter_by_salary_sequential(persons, threshold);
            }
            Op::FilterParallel => {
                filter::filter_by_salary_parallel(persons, threshold);
            }
            Op::GroupLoop => {
                group::group_by_age_loop(persons);
            }
            Op::GroupSequential => {
                group::group_by_age_sequential(persons);
            }
            Op::GroupParallel => {
                group::group_by_age_parallel(persons);
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Measure the average latency of one processing strategy")]
struct HarnessArgs {
    /// Index into the record-set-size table {100, 1000, 10000, 100000,
    /// 1000000}.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..5))]
    index: u8,

    /// Strategy operation to measure.
    #[arg(short, long, value_enum)]
    op: Op,

    /// Timed invocations.
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Untimed warm-up invocations.
    #[arg(long, default_value_t = 5)]
    warmup: usize,

    /// Base RNG seed for record generation.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Newline-delimited name vocabulary.
    #[arg(long, default_value = "resources/names.txt")]
    names: String,

    /// Newline-delimited street vocabulary.
    #[arg(long, default_value = "resources/streets.txt")]
    streets: String,

    /// Newline-delimited occupation vocabulary.
    #[arg(long, default_value = "resources/occupations.txt")]
    occupations: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = HarnessArgs::parse();

    let vocab = Vocabulary::load(&args.names, &args.streets, &args.occupations).await?;
    let size = config::RECORD_SET_SIZES[args.index as usize];
    let threshold = config::DEFAULT_SALARY_THRESHOLD;

    println!(
        "measuring {} over {} records ({} warm-up, {} timed invocations)",
        args.op.label(),
        size,
        args.warmup,
        args.iterations
    );

    for round in 0..args.warmup {
        let persons = person::func::generate_with_rng(
            size,
            &vocab,
            &mut StdRng::seed_from_u64(args.seed + round as u64),
        )?;
        args.op.invoke(&persons, threshold);
    }

    let meter = LatencyMeter::new(args.op.label());
    for round in 0..args.iterations {
        let persons = person::func::generate_with_rng(
            size,
            &vocab,
            &mut StdRng::seed_from_u64(args.seed + round as u64),
        )?;

        let _guard = meter.start();
        args.op.invoke(&persons, threshold);
    }

    meter.report();

    Ok(())
}
