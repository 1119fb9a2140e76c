//! Record generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::models::Person;
use crate::config;
use crate::error::Error;
use crate::vocab::Vocabulary;

/// Generate `count` records from an entropy-seeded RNG.
pub fn generate(count: usize, vocab: &Vocabulary) -> Result<Vec<Person>, Error> {
    generate_with_rng(count, vocab, &mut StdRng::from_entropy())
}

/// Generate `count` records from the supplied RNG.
///
/// Each field of each record is drawn independently and uniformly: the
/// string fields from their vocabulary lists, the age from
/// `0..AGE_BOUND`, the married flag as a coin flip, and the salary as an
/// integer from `0..SALARY_BOUND` stored as a float.
///
/// Fails before building any record if a vocabulary list is empty, since
/// selection indexes uniformly into each list.
pub fn generate_with_rng<R: Rng>(
    count: usize,
    vocab: &Vocabulary,
    rng: &mut R,
) -> Result<Vec<Person>, Error> {
    vocab.ensure_non_empty()?;

    let mut persons = Vec::with_capacity(count);
    for _ in 0..count {
        persons.push(Person {
            name: vocab.names[rng.gen_range(0..vocab.names.len())].clone(),
            age: rng.gen_range(0..config::AGE_BOUND),
            street: vocab.streets[rng.gen_range(0..vocab.streets.len())].clone(),
            married: rng.gen_bool(0.5),
            occupation: vocab.occupations[rng.gen_range(0..vocab.occupations.len())].clone(),
            salary: rng.gen_range(0..config::SALARY_BOUND) as f64,
        });
    }

    Ok(persons)
}
