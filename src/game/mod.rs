use anyhow::{anyhow, Context, Result};
use log::{error, info};
use std::collections::HashMap;
use std::path::Path;

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::QuizDefinition;
use crate::quiz::settings::Settings;
use crate::quiz::{Phase, QuizSession, RoundResult};


pub struct Game<O: QuizOutput> {
    session: QuizSession,
    settings: Settings,
    output: O,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(settings: Settings, output: O) -> Game<O> {
        Game {
            session: QuizSession::new(),
            settings,
            output,
        }
    }

    pub fn load(&mut self, source: &Path) -> Result<()> {
        let definition = QuizDefinition::open(source)
            .with_context(|| format!("Could not load quiz from {}", source.display()))?;
        self.begin(definition)
    }

    pub fn begin(&mut self, definition: QuizDefinition) -> Result<()> {
        if self.session.get_phase() != Phase::Loading {
            info!("A quiz is already loaded, keeping it");
            return Ok(());
        }
        let questions = definition.into_questions();
        let count = questions.len();
        self.session.initialize(questions);
        self.output.say(&Message::QuizLoaded(count))
    }

    pub fn play_round(&mut self) -> Result<RoundResult> {
        let active_questions = self.session.active_questions();
        self.output.say(&Message::RoundBegins(
            self.session.round(),
            active_questions.len(),
        ))?;

        let mut answers = HashMap::new();
        for (index, (id, question)) in active_questions.iter().enumerate() {
            let choice = self.output.ask(index + 1, question)?;
            answers.insert(*id, choice);
        }

        let result = self.session.submit_round(&answers)?;
        self.output.say(&Message::RoundResults {
            score: result.score,
            total_attempted: result.total_attempted,
            accuracy_rate: result.accuracy_rate,
        })?;
        if result.is_complete {
            self.output.say(&Message::QuizComplete)?;
        }
        Ok(result)
    }

    pub fn play(&mut self) -> Result<()> {
        if self.session.get_phase() == Phase::Loading {
            return Err(anyhow!("No quiz has been loaded"));
        }
        while !self.session.is_complete() {
            if let Some(max_rounds) = self.settings.max_rounds {
                if self.session.round() > max_rounds {
                    let remaining = self.session.active_questions().len();
                    info!("Stopping after {} rounds", max_rounds);
                    return self.output.say(&Message::RoundLimitReached(remaining));
                }
            }
            self.play_round()?;
        }
        Ok(())
    }

    /// Loads and plays a quiz, reporting any failure to the user.
    /// Returns whether the quiz ran to the end without error.
    pub fn run(&mut self, source: &Path) -> bool {
        let result = (|| -> Result<()> {
            self.load(source)?;
            self.play()
        })();

        if let Err(e) = result {
            error!("{:#}", e);
            if let Err(e) = self.output.say(&Message::Error(format!("{:#}", e))) {
                error!("Could not report error: {:#}", e);
            }
            return false;
        }
        true
    }

    pub fn get_session(&self) -> &QuizSession {
        &self.session
    }
}
