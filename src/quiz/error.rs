use thiserror::Error;

use crate::quiz::definition::QuestionId;

/// Malformed or inconsistent quiz data. Rows are numbered from 1, starting
/// with the first row after the header.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Could not read quiz data")]
    Io(#[from] std::io::Error),
    #[error("Row {row}: malformed CSV")]
    Csv { row: usize, source: csv::Error },
    #[error("Row {row}: missing value for `{field}`")]
    MissingField { row: usize, field: &'static str },
    #[error("Row {row}: option `{option}` appears more than once")]
    DuplicateOption { row: usize, option: String },
    #[error("Row {row}: answer `{answer}` does not match any option")]
    AnswerNotFound { row: usize, answer: String },
    #[error("Row {row}: question `{question}` already appears on row {first_row}")]
    DuplicateQuestion {
        row: usize,
        first_row: usize,
        question: String,
    },
    #[error("Quiz data does not contain any question")]
    Empty,
}

/// A round submission that does not match the active question set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("There is no round in progress")]
    NoRoundInProgress,
    #[error("No answer was submitted for question {0}")]
    MissingAnswer(QuestionId),
    #[error("Question {0} is not part of the current round")]
    UnknownQuestion(QuestionId),
    #[error("Question {id} has no option {index}")]
    OptionOutOfRange { id: QuestionId, index: usize },
}
