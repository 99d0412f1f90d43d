use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of answers a question must offer.
pub const MIN_ANSWERS: usize = 2;

/// Raised when a question is built directly from invalid fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("answer list must contain at least two answers, got {0}")]
    TooFewAnswers(usize),

    #[error("solution index {index} is out of range for {len} answers")]
    SolutionIndexOutOfRange { index: i64, len: usize },
}

/// A quiz question as served by the quiz server.
///
/// Instances can only be obtained through [`QuizQuestion::new`] or the
/// parser, so every value in memory satisfies:
///
/// * at least [`MIN_ANSWERS`] answers
/// * `solution_index() < answers().len()`
///
/// The question is immutable once built. Answers and tags are owned by the
/// question and only handed out as read-only slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct QuizQuestion {
    id: i64,
    owner: String,
    #[serde(rename = "question")]
    body: String,
    answers: Vec<String>,
    #[serde(rename = "solutionIndex")]
    solution_index: usize,
    tags: Vec<String>,
}

impl QuizQuestion {
    /// Build a question, checking every invariant before returning.
    ///
    /// # Arguments
    ///
    /// * `id` - Numeric ID of the question, any value is accepted.
    /// * `owner` - Name of the owner of the question.
    /// * `body` - The question text.
    /// * `answers` - Two or more possible answers.
    /// * `solution_index` - Index of the correct answer in `answers`.
    /// * `tags` - Zero or more tags associated with the question.
    pub fn new(
        id: i64,
        owner: impl Into<String>,
        body: impl Into<String>,
        answers: impl Into<Vec<String>>,
        solution_index: i64,
        tags: impl Into<Vec<String>>,
    ) -> Result<Self, QuestionError> {
        let answers = answers.into();

        if answers.len() < MIN_ANSWERS {
            return Err(QuestionError::TooFewAnswers(answers.len()));
        }

        let solution_index = usize::try_from(solution_index)
            .ok()
            .filter(|&index| index < answers.len())
            .ok_or(QuestionError::SolutionIndexOutOfRange {
                index: solution_index,
                len: answers.len(),
            })?;

        Ok(Self {
            id,
            owner: owner.into(),
            body: body.into(),
            answers,
            solution_index,
            tags: tags.into(),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn solution_index(&self) -> usize {
        self.solution_index
    }

    /// Returns a (possibly empty) list of tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The answer at the solution index.
    pub fn correct_answer(&self) -> &str {
        &self.answers[self.solution_index]
    }

    /// Whether `choice` is the index of the correct answer.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.solution_index
    }
}

/// Plain-text listing: header line, numbered answers with the correct one
/// starred, then the tags if there are any.
impl fmt::Display for QuizQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}] {}", self.id, self.owner, self.body)?;

        for (i, answer) in self.answers.iter().enumerate() {
            let marker = if self.is_correct(i) { '*' } else { ' ' };
            write!(f, "\n {} {}. {}", marker, i + 1, answer)?;
        }

        if !self.tags.is_empty() {
            write!(f, "\n   tags: {}", self.tags.join(", "))?;
        }

        Ok(())
    }
}
