//! Grouping records by age in three execution strategies.

use std::collections::HashMap;

use itertools::Itertools;
use rayon::prelude::*;

use crate::partition::Merge;
use crate::person::Person;

/// The mapping every grouping strategy produces: age to the records
/// sharing it, in source order within each bucket.
pub type AgeGroups = HashMap<u8, Vec<Person>>;

/// Explicit accumulation: append to the bucket, creating it on the first
/// occurrence of an age.
pub fn group_by_age_loop(persons: &[Person]) -> AgeGroups {
    let mut result = AgeGroups::new();
    for person in persons {
        result.entry(person.age).or_default().push(person.clone());
    }

    result
}

/// Single-threaded grouping transform; equivalent mapping, same bucket
/// order.
pub fn group_by_age_sequential(persons: &[Person]) -> AgeGroups {
    persons
        .iter()
        .map(|person| (person.age, person.clone()))
        .into_group_map()
}

/// Chunk-local grouping over rayon's pool, merged in chunk order.
///
/// Each chunk groups its contiguous slice independently; buckets are then
/// appended chunk by chunk, so a bucket holds chunk 0's records before
/// chunk 1's. With contiguous in-order chunks this reproduces source
/// order.
pub fn group_by_age_parallel(persons: &[Person]) -> AgeGroups {
    if persons.is_empty() {
        return AgeGroups::new();
    }

    let chunk_len = persons.len().div_ceil(rayon::current_num_threads());
    let partials: Vec<AgeGroups> = persons
        .par_chunks(chunk_len)
        .map(group_by_age_loop)
        .collect();

    let mut result = AgeGroups::new();
    for partial in partials {
        result.merge(partial);
    }

    result
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::person::func::generate_with_rng;
    use crate::vocab::Vocabulary;

    fn person_with_age(name: &str, age: u8) -> Person {
        Person {
            name: name.to_owned(),
            age,
            street: "Main Street".to_owned(),
            married: false,
            occupation: "Baker".to_owned(),
            salary: 1_000.0,
        }
    }

    fn generated_set(count: usize) -> Vec<Person> {
        let vocab = Vocabulary::from_lists(
            vec!["Hans".to_owned(), "Julia".to_owned(), "Maria".to_owned()],
            vec!["Main Street".to_owned(), "Elm Street".to_owned()],
            vec!["Teacher".to_owned(), "Baker".to_owned()],
        );

        generate_with_rng(count, &vocab, &mut StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn buckets_keep_source_order() {
        let persons = vec![
            person_with_age("first", 30),
            person_with_age("second", 25),
            person_with_age("third", 30),
        ];

        for result in [
            group_by_age_loop(&persons),
            group_by_age_sequential(&persons),
            group_by_age_parallel(&persons),
        ] {
            assert_eq!(result.len(), 2);
            assert_eq!(result[&30], vec![persons[0].clone(), persons[2].clone()]);
            assert_eq!(result[&25], vec![persons[1].clone()]);
        }
    }

    #[test]
    fn all_strategies_agree_on_a_generated_set() {
        let persons = generated_set(2_000);

        let looped = group_by_age_loop(&persons);
        let sequential = group_by_age_sequential(&persons);
        let parallel = group_by_age_parallel(&persons);

        assert_eq!(looped, sequential);
        assert_eq!(looped, parallel);
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket() {
        let persons = generated_set(1_000);

        let groups = group_by_age_loop(&persons);

        let grouped: usize = groups.values().map(Vec::len).sum();
        assert_eq!(grouped, persons.len());
        for (age, bucket) in &groups {
            assert!(bucket.iter().all(|person| person.age == *age));
        }
    }

    #[test]
    fn grouping_twice_yields_the_same_mapping() {
        let persons = generated_set(500);

        let first = group_by_age_sequential(&persons);
        let second = group_by_age_sequential(&persons);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        assert!(group_by_age_loop(&[]).is_empty());
        assert!(group_by_age_sequential(&[]).is_empty());
        assert!(group_by_age_parallel(&[]).is_empty());
    }
}
