use env_logger::Env;
use log::{error, info};
use std::env;
use std::path::PathBuf;
use std::process;

mod game;
mod output;
mod quiz;

use crate::game::Game;
use crate::output::console::ConsoleOutput;
use crate::quiz::settings::Settings;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let source = match env::args_os()
        .nth(1)
        .or_else(|| env::var_os("QUIZ_FILE"))
        .map(PathBuf::from)
    {
        Some(source) => source,
        None => {
            eprintln!("Usage: five-choice-quiz <quiz.csv> (or set QUIZ_FILE)");
            process::exit(2);
        }
    };

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{:#}", e);
            process::exit(2);
        }
    };

    let output = ConsoleOutput::stdio(settings.accuracy_precision);
    let mut game = Game::new(settings, output);
    let completed = game.run(&source);
    info!(
        "Quiz ended in phase {:?} after {} rounds",
        game.get_session().get_phase(),
        game.get_session().round()
    );
    if !completed {
        process::exit(1);
    }
}
