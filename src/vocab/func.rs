//! Reading newline-delimited vocabulary files.

use std::path::Path;

use tokio::fs;

use crate::error::Error;

/// Read a newline-delimited vocabulary file fully into an ordered list.
///
/// Blank lines are skipped. A read failure is returned to the caller
/// immediately; there is no degraded empty-list fallback.
pub async fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| Error::VocabularyIo {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn reads_lines_in_file_order() {
        let path = std::env::temp_dir().join("cohort_vocab_read_lines.txt");
        std::fs::write(&path, "Hans\nJulia\n\nMaria\n").unwrap();

        let lines = read_lines(&path).await.unwrap();

        assert_eq!(lines, vec!["Hans", "Julia", "Maria"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("cohort_vocab_does_not_exist.txt");

        let result = read_lines(&path).await;

        assert!(matches!(result, Err(Error::VocabularyIo { .. })));
    }
}
