//! Salary filtering in three execution strategies.
//!
//! All three keep the predicate `salary < threshold` (strict, so a record
//! whose salary equals the threshold is excluded) and never touch the
//! source slice.

use rayon::prelude::*;

use crate::person::Person;

/// Explicit single-threaded iteration and accumulation.
pub fn filter_by_salary_loop(persons: &[Person], threshold: f64) -> Vec<Person> {
    let mut result = Vec::new();
    for person in persons {
        if person.salary < threshold {
            result.push(person.clone());
        }
    }

    result
}

/// Single-threaded iterator pipeline; same output, same order as the loop.
pub fn filter_by_salary_sequential(persons: &[Person], threshold: f64) -> Vec<Person> {
    persons
        .iter()
        .filter(|person| person.salary < threshold)
        .cloned()
        .collect()
}

/// Parallel pipeline over rayon's pool.
///
/// The indexed collect keeps source order, so the result matches the
/// sequential variants exactly, not just as a set.
pub fn filter_by_salary_parallel(persons: &[Person], threshold: f64) -> Vec<Person> {
    persons
        .par_iter()
        .filter(|person| person.salary < threshold)
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::person::func::generate_with_rng;
    use crate::vocab::Vocabulary;

    fn person_with_salary(salary: f64) -> Person {
        Person {
            name: "Hans".to_owned(),
            age: 40,
            street: "Main Street".to_owned(),
            married: false,
            occupation: "Baker".to_owned(),
            salary,
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
    fn threshold_is_exclusive_and_order_is_kept() {
        let persons: Vec<Person> = [100.0, 6_000.0, 3_000.0, 2_999.0, 3_000.0]
            .into_iter()
            .map(person_with_salary)
            .collect();

        for result in [
            filter_by_salary_loop(&persons, 3_000.0),
            filter_by_salary_sequential(&persons, 3_000.0),
            filter_by_salary_parallel(&persons, 3_000.0),
        ] {
            let salaries: Vec<f64> = result.iter().map(|person| person.salary).collect();
            assert_eq!(salaries, vec![100.0, 2_999.0]);
        }
    }

    #[test]
    fn all_strategies_agree_on_a_generated_set() {
        let persons = generated_set(2_000);

        let looped = filter_by_salary_loop(&persons, 3_000.0);
        let sequential = filter_by_salary_sequential(&persons, 3_000.0);
        let parallel = filter_by_salary_parallel(&persons, 3_000.0);

        assert_eq!(looped, sequential);
        assert_eq!(looped, parallel);
    }

    #[test]
    fn source_set_is_left_untouched() {
        let persons = generated_set(500);
        let before = persons.clone();

        filter_by_salary_parallel(&persons, 3_000.0);

        assert_eq!(persons, before);
    }

    #[test]
    fn filtering_twice_yields_the_same_result() {
        let persons = generated_set(500);

        let first = filter_by_salary_sequential(&persons, 3_000.0);
        let second = filter_by_salary_sequential(&persons, 3_000.0);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_by_salary_loop(&[], 3_000.0).is_empty());
        assert!(filter_by_salary_sequential(&[], 3_000.0).is_empty());
        assert!(filter_by_salary_parallel(&[], 3_000.0).is_empty());
    }
}
