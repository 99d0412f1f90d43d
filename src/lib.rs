//! # sweng-quiz
//!
//! Validated quiz questions as served by the SwEng quiz server.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sweng_quiz::{QuestionBank, QuizError, QuizQuestion};
//!
//! fn main() -> Result<(), QuizError> {
//!     // A single question straight from a server response
//!     let question: QuizQuestion = r#"{
//!         "id": 17005,
//!         "question": "What is the capital of Antigua and Barbuda?",
//!         "answers": ["Chisinau", "Saipan", "St. John's", "Plymouth"],
//!         "solutionIndex": 2,
//!         "tags": ["capitals", "geography", "countries"],
//!         "owner": "sweng"
//!     }"#
//!     .parse()
//!     .expect("malformed question");
//!     assert_eq!(question.correct_answer(), "St. John's");
//!
//!     // A whole bank of questions from disk
//!     let bank = QuestionBank::from_json("questions.json")?;
//!     for question in bank.with_tag("geography") {
//!         println!("{}", question);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod data;
mod models;
pub mod network;

use std::io;
use std::path::Path;

use thiserror::Error;

pub use data::{
    load_questions_from_json, load_questions_lenient, parse_from_json, parse_from_slice,
    parse_from_str, LoadError, LoadReport, ParseError, DEFAULT_QUESTIONS_PATH,
};
pub use models::{QuestionError, QuizQuestion, MIN_ANSWERS};
pub use network::{fetch_question, FetchError, NetworkProvider};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error encoding questions as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered collection of validated questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Create a bank from a vector of questions.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    /// Load a bank from a JSON file, rejecting it if any question is malformed.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sweng_quiz::QuestionBank;
    ///
    /// let bank = QuestionBank::from_json("questions.json").expect("Failed to load questions");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Load a bank from a JSON file, dropping malformed questions.
    ///
    /// Fails if no question survives.
    pub fn from_json_lenient<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let report = load_questions_lenient(path)?;

        if report.questions.is_empty() {
            return Err(LoadError::Empty(path.to_path_buf()).into());
        }

        Ok(Self::new(report.questions))
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions carrying `tag`, in bank order.
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a QuizQuestion> + 'a {
        self.questions
            .iter()
            .filter(move |question| question.tags().iter().any(|t| t == tag))
    }
}
