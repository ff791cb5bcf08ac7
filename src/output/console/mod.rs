use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use log::debug;
use parking_lot::Mutex;
use regex::Regex;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::Question;


lazy_static! {
    static ref CHOICE_REGEX: Regex = Regex::new(r"^[(（]?\s*(\d+)\s*[)）]?$").unwrap();
}

/// Plays the quiz over a line-based text stream.
pub struct ConsoleOutput<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
    accuracy_precision: usize,
}

impl ConsoleOutput<BufReader<Stdin>, Stdout> {
    pub fn stdio(accuracy_precision: usize) -> Self {
        ConsoleOutput::new(BufReader::new(io::stdin()), io::stdout(), accuracy_precision)
    }
}

impl<R: BufRead, W: Write> ConsoleOutput<R, W> {
    pub fn new(input: R, output: W, accuracy_precision: usize) -> Self {
        ConsoleOutput {
            input: Mutex::new(input),
            output: Mutex::new(output),
            accuracy_precision,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Error(error) => format!("An error occurred: {}", error),
            QuizComplete => "You answered every question correctly!".into(),
            QuizLoaded(count) => format!("Loaded {} questions.", count),
            RoundBegins(round, count) => {
                format!("\n=== Round {} ({} questions) ===", round, count)
            }
            RoundLimitReached(remaining) => format!(
                "Round limit reached with {} questions left to master.",
                remaining
            ),
            RoundResults {
                score,
                total_attempted,
                accuracy_rate,
            } => format!(
                "Your score: {} / {}\nAccuracy: {:.*}%",
                score,
                total_attempted,
                self.accuracy_precision,
                accuracy_rate * 100.0
            ),
        }
    }

    fn parse_choice(line: &str, option_count: usize) -> Option<usize> {
        let captures = CHOICE_REGEX.captures(line)?;
        let number: usize = captures[1].parse().ok()?;
        if number >= 1 && number <= option_count {
            Some(number - 1)
        } else {
            None
        }
    }
}

impl<R: BufRead, W: Write> QuizOutput for ConsoleOutput<R, W> {
    fn say(&self, message: &Message) -> Result<()> {
        let text = self.interpret_message(message);
        let mut output = self.output.lock();
        writeln!(output, "{}", text)?;
        output.flush()?;
        Ok(())
    }

    fn ask(&self, number: usize, question: &Question) -> Result<Option<usize>> {
        let option_count = question.options.len();
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("({}) {}", index + 1, option))
            .join("\n");

        let mut output = self.output.lock();
        let mut input = self.input.lock();
        writeln!(output, "\nQuestion {}\n{}\n{}", number, question.question, options)?;

        loop {
            write!(
                output,
                "Your answer (1-{}, blank to skip): ",
                option_count
            )?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Could not read answer")?;
            if read == 0 {
                return Err(anyhow!("Input closed before the round was submitted"));
            }

            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }
            if let Some(choice) = Self::parse_choice(line, option_count) {
                return Ok(Some(choice));
            }

            debug!("Rejected answer input: {:?}", line);
            writeln!(
                output,
                "Please enter a number from 1 to {}, or leave blank to skip.",
                option_count
            )?;
        }
    }
}
