mod utils;
mod models;
use std::io;
use dotenv::dotenv;
use log::{error, info};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use crate::utils::config::Config;
use crate::utils::gpa::Gradebook;
use crate::utils::session::Session;

fn main() {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {:#}", e);
            return;
        }
    };

    // Logs go to the terminal; stdout stays reserved for the session output.
    if let Err(e) = TermLogger::init(
        config.log_level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto
    ) {
        eprintln!("Error initialising logger: {}", e);
    }

    let book = if config.seed_courses {
        Gradebook::with_seed_courses()
    } else {
        Gradebook::new()
    };
    info!("Starting with {} course(s)", book.len());

    let mut session = match Session::new(book) {
        Ok(session) => session,
        Err(e) => {
            error!("Error starting session: {:#}", e);
            return;
        }
    };

    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), io::stdout()) {
        error!("Session aborted: {:#}", e);
    }
}
