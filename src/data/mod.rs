mod loader;
mod parser;

pub use loader::{
    load_questions_from_json, load_questions_lenient, LoadError, LoadReport, DEFAULT_QUESTIONS_PATH,
};
pub use parser::{parse_from_json, parse_from_slice, parse_from_str, ParseError};
