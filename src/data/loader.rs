use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::parser::{parse_from_json, ParseError};
use crate::models::QuizQuestion;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Error loading a question bank from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Syntax {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("question {index} in {} is malformed: {source}", path.display())]
    Question {
        path: PathBuf,
        index: usize,
        source: ParseError,
    },

    #[error("{} must contain at least one question", .0.display())]
    Empty(PathBuf),
}

/// Outcome of a lenient load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub questions: Vec<QuizQuestion>,
    /// Index of each rejected document in the bank and why it was rejected.
    pub rejected: Vec<(usize, ParseError)>,
}

/// Load every question in `path`, failing on the first malformed one.
///
/// The file holds either a single question document or an array of them.
pub fn load_questions_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<QuizQuestion>, LoadError> {
    let path = path.as_ref();
    let documents = read_bank(path)?;

    let questions = documents
        .iter()
        .enumerate()
        .map(|(index, document)| {
            parse_from_json(document).map_err(|source| LoadError::Question {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Load the questions in `path`, skipping the malformed ones.
pub fn load_questions_lenient<P: AsRef<Path>>(path: P) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let documents = read_bank(path)?;

    let mut report = LoadReport::default();
    for (index, document) in documents.iter().enumerate() {
        match parse_from_json(document) {
            Ok(question) => report.questions.push(question),
            Err(err) => {
                warn!("Skipping question {} in {}: {}", index, path.display(), err);
                report.rejected.push((index, err));
            }
        }
    }

    debug!(
        "Loaded {} questions from {} ({} rejected)",
        report.questions.len(),
        path.display(),
        report.rejected.len()
    );
    Ok(report)
}

fn read_bank(path: &Path) -> Result<Vec<Value>, LoadError> {
    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bank: Value = serde_json::from_str(&json_content).map_err(|source| LoadError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = match bank {
        Value::Array(documents) => documents,
        document => vec![document],
    };

    if documents.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn bank_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn question_json(id: i64, solution_index: i64) -> String {
        format!(
            r#"{{"id":{},"question":"q{}","answers":["yes","no"],"solutionIndex":{},"tags":[],"owner":"sweng"}}"#,
            id, id, solution_index
        )
    }

    #[test]
    fn test_load_array() {
        let file = bank_file(&format!("[{},{}]", question_json(1, 0), question_json(2, 1)));

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id(), 1);
        assert_eq!(questions[1].correct_answer(), "no");
    }

    #[test]
    fn test_load_single_document() {
        let file = bank_file(&question_json(7, 0));

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].body(), "q7");
    }

    #[test]
    fn test_malformed_entry_fails_load() {
        let file = bank_file(&format!("[{},{}]", question_json(1, 0), question_json(2, 5)));

        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Question {
                index: 1,
                source: ParseError::InvalidQuestion(_),
                ..
            }
        ));
    }

    #[test]
    fn test_lenient_load_skips_malformed() {
        let file = bank_file(&format!(
            "[{},{},{}]",
            question_json(1, 0),
            question_json(2, -1),
            question_json(3, 1)
        ));

        let report = load_questions_lenient(file.path()).unwrap();
        let ids: Vec<i64> = report.questions.iter().map(|q| q.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].0, 1);
    }

    #[test]
    fn test_empty_bank() {
        let file = bank_file("[]");

        assert!(matches!(
            load_questions_from_json(file.path()),
            Err(LoadError::Empty(_))
        ));
        assert!(matches!(
            load_questions_lenient(file.path()),
            Err(LoadError::Empty(_))
        ));

        let err = LoadError::Empty(PathBuf::from("bank.json"));
        assert_eq!(err.to_string(), "bank.json must contain at least one question");
    }

    #[test]
    fn test_invalid_json_file() {
        let file = bank_file("[{");

        assert!(matches!(
            load_questions_from_json(file.path()),
            Err(LoadError::Syntax { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_questions_from_json(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
