//! The vocabulary model.

use std::path::Path;

use tracing::debug;

use super::func;
use crate::error::Error;

/// The three ordered word lists generation draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    pub names: Vec<String>,
    pub streets: Vec<String>,
    pub occupations: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from in-memory lists.
    pub fn from_lists(
        names: Vec<String>,
        streets: Vec<String>,
        occupations: Vec<String>,
    ) -> Self {
        Self {
            names,
            streets,
            occupations,
        }
    }

    /// Load all three lists from newline-delimited files.
    ///
    /// Any unreadable file fails the whole load.
    pub async fn load(
        names: impl AsRef<Path>,
        streets: impl AsRef<Path>,
        occupations: impl AsRef<Path>,
    ) -> Result<Self, Error> {
        let (names, streets, occupations) = tokio::try_join!(
            func::read_lines(names),
            func::read_lines(streets),
            func::read_lines(occupations),
        )?;

        debug!(
            names = names.len(),
            streets = streets.len(),
            occupations = occupations.len(),
            "vocabulary loaded"
        );

        Ok(Self {
            names,
            streets,
            occupations,
        })
    }

    /// Check that every list has at least one entry.
    pub fn ensure_non_empty(&self) -> Result<(), Error> {
        if self.names.is_empty() {
            return Err(Error::EmptyVocabulary("names"));
        }
        if self.streets.is_empty() {
            return Err(Error::EmptyVocabulary("streets"));
        }
        if self.occupations.is_empty() {
            return Err(Error::EmptyVocabulary("occupations"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn load_fails_when_any_file_is_missing() {
        let dir = std::env::temp_dir();
        let names = dir.join("cohort_vocab_names.txt");
        let streets = dir.join("cohort_vocab_streets.txt");
        std::fs::write(&names, "Hans\n").unwrap();
        std::fs::write(&streets, "Main Street\n").unwrap();

        let result = Vocabulary::load(
            &names,
            &streets,
            dir.join("cohort_vocab_missing_occupations.txt"),
        )
        .await;

        assert!(matches!(result, Err(Error::VocabularyIo { .. })));

        std::fs::remove_file(&names).unwrap();
        std::fs::remove_file(&streets).unwrap();
    }

    #[test]
    fn ensure_non_empty_names_the_offending_list() {
        let vocab = Vocabulary::from_lists(vec!["Hans".to_owned()], vec![], vec![]);

        assert!(matches!(
            vocab.ensure_non_empty(),
            Err(Error::EmptyVocabulary("streets"))
        ));
    }
}
