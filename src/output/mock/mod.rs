use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::Question;

#[derive(Clone, Copy, Debug)]
pub enum Answer {
    Correct,
    Incorrect,
    Skip,
    Choose(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Asked(usize, String),
    Said(Message),
}

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
    answers: Arc<RwLock<VecDeque<Answer>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_answers(answers: &[Answer]) -> Self {
        let output = MockQuizOutput::new();
        output.queue_answers(answers);
        output
    }

    pub fn queue_answers(&self, answers: &[Answer]) {
        self.answers.write().extend(answers.iter().copied());
    }

    pub fn flush(&self) -> Vec<Entry> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Said(message) => Some(message.clone()),
                Entry::Asked(_, _) => None,
            })
            .collect()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages().iter().any(|m| m == message)
    }
}

impl QuizOutput for MockQuizOutput {
    fn say(&self, message: &Message) -> Result<()> {
        self.entries.write().push(Entry::Said(message.clone()));
        Ok(())
    }

    fn ask(&self, number: usize, question: &Question) -> Result<Option<usize>> {
        self.entries
            .write()
            .push(Entry::Asked(number, question.question.clone()));
        let answer = self
            .answers
            .write()
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer left"))?;
        Ok(match answer {
            Answer::Correct => Some(question.correct_index),
            Answer::Incorrect => Some((question.correct_index + 1) % question.options.len()),
            Answer::Skip => None,
            Answer::Choose(index) => Some(index),
        })
    }
}
