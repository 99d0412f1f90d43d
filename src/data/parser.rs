//! Conversion of quiz server JSON documents into [`QuizQuestion`]s.
//!
//! The expected document shape is:
//!
//! ```json
//! {
//!   "id": 17005,
//!   "question": "What is the capital of Antigua and Barbuda?",
//!   "answers": ["Chisinau", "Saipan", "St. John's", "Plymouth"],
//!   "solutionIndex": 2,
//!   "tags": ["capitals", "geography", "countries"],
//!   "owner": "sweng"
//! }
//! ```
//!
//! Unknown fields are ignored. Every failure, including a question that is
//! well-typed but violates the question invariants, is reported as a
//! [`ParseError`].

use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{QuestionError, QuizQuestion};

/// The server sent a malformed question.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("question document must be a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("element {index} of `{field}` must be a string")]
    NonStringElement { field: &'static str, index: usize },

    #[error("invalid question structure: {0}")]
    InvalidQuestion(#[from] QuestionError),
}

/// Build a question from a decoded JSON document.
pub fn parse_from_json(document: &Value) -> Result<QuizQuestion, ParseError> {
    let document = document.as_object().ok_or(ParseError::NotAnObject)?;

    let body = string_field(document, "question")?;
    let owner = string_field(document, "owner")?;
    let answers = string_array_field(document, "answers")?;
    let tags = string_array_field(document, "tags")?;

    let id = integer_field(document, "id")?;
    let solution_index = integer_field(document, "solutionIndex")
        .and_then(|index| {
            i32::try_from(index).map_err(|_| ParseError::WrongType {
                field: "solutionIndex",
                expected: "a 32-bit integer",
            })
        })?;

    Ok(QuizQuestion::new(id, owner, body, answers, i64::from(solution_index), tags)?)
}

/// Decode `text` as JSON and build a question from it.
pub fn parse_from_str(text: &str) -> Result<QuizQuestion, ParseError> {
    let document: Value = serde_json::from_str(text)?;
    parse_from_json(&document)
}

/// Decode a raw response body as JSON and build a question from it.
pub fn parse_from_slice(bytes: &[u8]) -> Result<QuizQuestion, ParseError> {
    let document: Value = serde_json::from_slice(bytes)?;
    parse_from_json(&document)
}

impl FromStr for QuizQuestion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_str(s)
    }
}

impl TryFrom<&Value> for QuizQuestion {
    type Error = ParseError;

    fn try_from(document: &Value) -> Result<Self, Self::Error> {
        parse_from_json(document)
    }
}

impl TryFrom<Value> for QuizQuestion {
    type Error = ParseError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        parse_from_json(&document)
    }
}

fn field<'a>(
    document: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, ParseError> {
    document.get(name).ok_or(ParseError::MissingField(name))
}

fn string_field(document: &Map<String, Value>, name: &'static str) -> Result<String, ParseError> {
    match field(document, name)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ParseError::WrongType {
            field: name,
            expected: "a string",
        }),
    }
}

fn string_array_field(
    document: &Map<String, Value>,
    name: &'static str,
) -> Result<Vec<String>, ParseError> {
    let Value::Array(items) = field(document, name)? else {
        return Err(ParseError::WrongType {
            field: name,
            expected: "an array",
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ParseError::NonStringElement { field: name, index }),
        })
        .collect()
}

fn integer_field(document: &Map<String, Value>, name: &'static str) -> Result<i64, ParseError> {
    coerce_integer(field(document, name)?).ok_or(ParseError::WrongType {
        field: name,
        expected: "an integer",
    })
}

/// Integers are taken as-is, finite floats are truncated toward zero, and
/// numeric strings are read the same way.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn truncate(value: f64) -> Option<i64> {
    // 2^63, exactly representable as f64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let value = value.trunc();
    (value.is_finite() && value >= -LIMIT && value < LIMIT).then_some(value as i64)
}
