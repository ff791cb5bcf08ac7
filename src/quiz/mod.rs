use log::{debug, info};
use std::collections::HashMap;

use self::definition::*;
use self::error::InputError;

pub mod definition;
pub mod error;
pub mod settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Loading,
    RoundInProgress,
    RoundScored,
    Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundResult {
    pub round: usize,
    pub score: usize,
    pub total_attempted: usize,
    pub accuracy_rate: f64,
    pub is_complete: bool,
    pub incorrect: Vec<QuestionId>,
}

/// Tracks which questions still need a correct answer.
///
/// Every round covers the questions answered incorrectly in the previous
/// one, until a round is answered without mistakes.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    active_questions: Vec<QuestionId>,
    round: usize,
    current_phase: Phase,
}

impl Default for QuizSession {
    fn default() -> Self {
        QuizSession {
            questions: Vec::new(),
            active_questions: Vec::new(),
            round: 0,
            current_phase: Phase::Loading,
        }
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Default::default()
    }

    /// Has no effect once a question set was loaded, so the same upload is
    /// never shuffled twice.
    pub fn initialize(&mut self, questions: Vec<Question>) {
        if self.current_phase != Phase::Loading {
            debug!("Quiz session already initialized, ignoring new questions");
            return;
        }

        self.active_questions = (0..questions.len()).map(QuestionId).collect();
        self.questions = questions;
        self.round = 1;
        info!("Quiz session starts with {} questions", self.questions.len());

        if self.active_questions.is_empty() {
            self.set_current_phase(Phase::Complete);
        } else {
            self.set_current_phase(Phase::RoundInProgress);
        }
    }

    pub fn submit_round(
        &mut self,
        answers: &HashMap<QuestionId, Option<usize>>,
    ) -> Result<RoundResult, InputError> {
        if self.current_phase != Phase::RoundInProgress {
            return Err(InputError::NoRoundInProgress);
        }

        for (id, choice) in answers {
            if !self.active_questions.contains(id) {
                return Err(InputError::UnknownQuestion(*id));
            }
            if let Some(index) = choice {
                if *index >= self.questions[id.0].options.len() {
                    return Err(InputError::OptionOutOfRange {
                        id: *id,
                        index: *index,
                    });
                }
            }
        }

        let mut score = 0;
        let mut incorrect = Vec::new();
        for id in &self.active_questions {
            let choice = answers.get(id).ok_or(InputError::MissingAnswer(*id))?;
            if self.questions[id.0].is_choice_correct(*choice) {
                score += 1;
            } else {
                incorrect.push(*id);
            }
        }

        let total_attempted = score + incorrect.len();
        let accuracy_rate = if total_attempted == 0 {
            0.0
        } else {
            score as f64 / total_attempted as f64
        };
        let result = RoundResult {
            round: self.round,
            score,
            total_attempted,
            accuracy_rate,
            is_complete: incorrect.is_empty(),
            incorrect: incorrect.clone(),
        };
        debug!("Round {} scored: {:?}", self.round, result);

        self.active_questions = incorrect;
        self.set_current_phase(Phase::RoundScored);
        self.advance();

        Ok(result)
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering quiz phase: {:?}", phase);
        self.current_phase = phase;
    }

    fn advance(&mut self) {
        if let Phase::RoundScored = self.current_phase {
            if self.active_questions.is_empty() {
                self.set_current_phase(Phase::Complete);
            } else {
                self.round += 1;
                self.set_current_phase(Phase::RoundInProgress);
            }
        }
    }

    pub fn active_questions(&self) -> Vec<(QuestionId, &Question)> {
        self.active_questions
            .iter()
            .map(|id| (*id, &self.questions[id.0]))
            .collect()
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.0)
    }

    pub fn questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn get_phase(&self) -> Phase {
        self.current_phase
    }

    /// 1-based number of the round being played, 0 before loading.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn is_complete(&self) -> bool {
        self.current_phase == Phase::Complete
    }
}
