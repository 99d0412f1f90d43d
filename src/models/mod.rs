mod question;

pub use question::{QuestionError, QuizQuestion, MIN_ANSWERS};
