use log::{debug, info};
use rand::Rng;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::quiz::error::DataError;

pub mod question;

pub use question::{Question, QuestionId, RawQuestion, OPTION_COUNT};


const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, DataError> {
        info!("Reading quiz data from {}", source.display());
        let file = File::open(source)?;
        QuizDefinition::from_reader(file)
    }

    /// Reads CSV quiz data. Invalid UTF-8 is replaced rather than rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition, DataError> {
        let rows = read_rows(reader)?;
        if rows.is_empty() {
            return Err(DataError::Empty);
        }
        let questions = load(&rows)?;
        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

pub fn read_rows<R: Read>(mut reader: R) -> Result<Vec<RawQuestion>, DataError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.trim_start_matches(BYTE_ORDER_MARK);

    let mut rows = Vec::new();
    let mut csv_reader = csv::Reader::from_reader(text.as_bytes());
    for (index, row) in csv_reader.deserialize().enumerate() {
        let row: RawQuestion = row.map_err(|source| DataError::Csv {
            row: index + 1,
            source,
        })?;
        rows.push(row);
    }

    debug!("Read {} rows of quiz data", rows.len());
    Ok(rows)
}

/// Turns raw rows into questions with shuffled options.
///
/// The first invalid row fails the whole batch: no question is returned
/// unless every row is valid.
pub fn load(rows: &[RawQuestion]) -> Result<Vec<Question>, DataError> {
    load_with_rng(rows, &mut rand::thread_rng())
}

pub fn load_with_rng<R: Rng + ?Sized>(
    rows: &[RawQuestion],
    rng: &mut R,
) -> Result<Vec<Question>, DataError> {
    let mut questions = Vec::with_capacity(rows.len());
    let mut first_rows: HashMap<String, usize> = HashMap::new();

    for (index, raw) in rows.iter().enumerate() {
        let row = index + 1;
        let question = Question::from_raw(row, raw, rng)?;
        if let Some(first_row) = first_rows.get(&question.question) {
            return Err(DataError::DuplicateQuestion {
                row,
                first_row: *first_row,
                question: question.question,
            });
        }
        first_rows.insert(question.question.clone(), row);
        questions.push(question);
    }

    info!("Loaded {} questions", questions.len());
    Ok(questions)
}
