//! Interactive walkthrough of the processing strategies, mirroring the
//! queries the benchmarks measure: a staged and a chained sequential
//! pipeline, a parallel compound-predicate filter, and the salary-band
//! query run as a parallel pipeline and through the manual partitioner.

use std::sync::Arc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

#[cfg(feature = "bench")]
use std::time::Instant;

use cohort::error::Error;
use cohort::partition;
use cohort::person::{self, Person};
use cohort::vocab::Vocabulary;
use cohort::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    println!(
        "Parameters:\n\
        - Names: {}\n\
        - Streets: {}\n\
        - Occupations: {}\n\
        - Count: {}\n\
        - Threshold: {}\n\
        - Chunks: {}\n",
        args.names, args.streets, args.occupations, args.count, args.threshold, args.chunks
    );

    #[cfg(feature = "bench")]
    let start = Instant::now();

    let vocab = Vocabulary::load(&args.names, &args.streets, &args.occupations).await?;
    let persons = match args.seed {
        Some(seed) => {
            person::func::generate_with_rng(args.count, &vocab, &mut StdRng::seed_from_u64(seed))?
        }
        None => person::func::generate(args.count, &vocab)?,
    };

    println!("######################");
    println!("step-by-step pipeline:");
    let ints: Vec<u32> = (1..=1_000).collect();
    let evens = ints.iter().filter(|n| *n % 2 == 0); // nothing runs until the collect below
    let even_ints: Vec<u32> = evens.copied().collect();
    println!(
        "{} even values, first five: {:?}",
        even_ints.len(),
        &even_ints[..5]
    );

    println!("######################");
    println!("the same, chained:");
    let even_ints_chained: Vec<u32> = (1..=1_000).filter(|n| n % 2 == 0).collect();
    println!(
        "{} even values, last five: {:?}",
        even_ints_chained.len(),
        &even_ints_chained[even_ints_chained.len() - 5..]
    );

    println!("######################");
    println!("married persons between 30 and 60 who work as a teacher and whose names start with 'J':");
    let teachers: Vec<Person> = persons
        .par_iter()
        .filter(|person| {
            person.married
                && (30..=60).contains(&person.age)
                && person.occupation == "Teacher"
                && person.name.starts_with('J')
        })
        .cloned()
        .collect();
    println!("{} matches", teachers.len());
    for person in teachers.iter().take(3) {
        println!("{person}");
    }
    println!("the source set still has size {}", persons.len());

    println!("######################");
    println!("salaries of persons whose names start with 'H', 5000 < salary < 5500, ascending:");

    let mut with_pipeline: Vec<f64> = persons
        .par_iter()
        .filter(|person| {
            person.name.starts_with('H') && person.salary > 5_000.0 && person.salary < 5_500.0
        })
        .map(|person| person.salary)
        .collect();
    with_pipeline.sort_by(f64::total_cmp);
    println!(
        "parallel pipeline: {} salaries, first five: {:?}",
        with_pipeline.len(),
        &with_pipeline[..5.min(with_pipeline.len())]
    );

    let records = Arc::new(persons);

    let mut with_closure = partition::task::run(Arc::clone(&records), args.chunks, |chunk: &[Person]| {
        Ok::<_, Error>(
            chunk
                .iter()
                .filter(|person| {
                    person.name.starts_with('H')
                        && person.salary > 5_000.0
                        && person.salary < 5_500.0
                })
                .map(|person| person.salary)
                .collect::<Vec<_>>(),
        )
    })
    .await?
    .into_result()?;
    with_closure.sort_by(f64::total_cmp);
    println!(
        "manual partitioner, closure work function: {} salaries",
        with_closure.len()
    );

    let mut with_named = partition::task::run(Arc::clone(&records), args.chunks, retrieve_salaries)
        .await?
        .into_result()?;
    with_named.sort_by(f64::total_cmp);
    println!(
        "manual partitioner, named work function: {} salaries",
        with_named.len()
    );

    println!(
        "all three strategies agree: {}",
        with_pipeline == with_closure && with_pipeline == with_named
    );

    #[cfg(feature = "bench")]
    println!("Elapsed time: {:?}", start.elapsed());

    Ok(())
}

/// Loop-based salary-band extraction used as a partitioner work function.
fn retrieve_salaries(persons: &[Person]) -> Result<Vec<f64>, Error> {
    let mut salaries = Vec::new();
    for person in persons {
        if person.name.starts_with('H') && person.salary > 5_000.0 && person.salary < 5_500.0 {
            salaries.push(person.salary);
        }
    }

    Ok(salaries)
}
