use anyhow::Result;

use crate::quiz::definition::Question;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Error(String),
    QuizComplete,
    QuizLoaded(usize),
    RoundBegins(usize, usize),
    RoundLimitReached(usize),
    RoundResults {
        score: usize,
        total_attempted: usize,
        accuracy_rate: f64,
    },
}

/// The user-facing side of a quiz.
pub trait QuizOutput {
    fn say(&self, message: &Message) -> Result<()>;

    /// Shows one question and returns the index of the chosen option,
    /// or `None` when the user left it unanswered.
    fn ask(&self, number: usize, question: &Question) -> Result<Option<usize>>;
}
