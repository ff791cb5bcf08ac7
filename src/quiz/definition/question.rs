use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

use crate::quiz::error::DataError;

pub const OPTION_COUNT: usize = 5;

/// One row of quiz data, as found in the source file.
///
/// Every field is optional so that a missing column or a blank cell can be
/// reported against the row it came from instead of failing deserialization.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: Option<String>,
    pub option1: Option<String>,
    pub option2: Option<String>,
    pub option3: Option<String>,
    pub option4: Option<String>,
    pub option5: Option<String>,
    pub answer: Option<String>,
}

/// Position of a question inside the full question set of a quiz.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct QuestionId(pub usize);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

fn require<'a>(
    row: usize,
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, DataError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DataError::MissingField { row, field }),
    }
}

impl Question {
    /// Builds a question from a raw row, shuffling its options.
    /// `row` is the 1-based row number used in error reports.
    pub fn from_raw<R: Rng + ?Sized>(
        row: usize,
        raw: &RawQuestion,
        rng: &mut R,
    ) -> Result<Question, DataError> {
        let question = require(row, "question", &raw.question)?;
        let fields: [(&'static str, &Option<String>); OPTION_COUNT] = [
            ("option1", &raw.option1),
            ("option2", &raw.option2),
            ("option3", &raw.option3),
            ("option4", &raw.option4),
            ("option5", &raw.option5),
        ];
        let mut options = Vec::with_capacity(OPTION_COUNT);
        for (field, value) in fields.iter() {
            options.push(require(row, *field, *value)?.to_owned());
        }
        let answer = require(row, "answer", &raw.answer)?;

        {
            let mut seen = HashSet::new();
            for option in &options {
                if !seen.insert(option.as_str()) {
                    return Err(DataError::DuplicateOption {
                        row,
                        option: option.clone(),
                    });
                }
            }
        }

        options.shuffle(rng);
        let correct_index = options
            .iter()
            .position(|option| option == answer)
            .ok_or_else(|| DataError::AnswerNotFound {
                row,
                answer: answer.to_owned(),
            })?;

        Ok(Question {
            question: question.to_owned(),
            options,
            correct_index,
        })
    }

    pub fn answer(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_choice_correct(&self, choice: Option<usize>) -> bool {
        choice == Some(self.correct_index)
    }
}
