mod app;
mod config;
mod editor;
mod error;
mod event;
mod input;
mod logging;
mod notes;
mod search;
mod terminal;
mod ui;

use std::panic;
use std::process::ExitCode;

use clap::Parser;

use config::{Cli, Config};
use event::run_app;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if config::is_informational(&err) => err.exit(),
        Err(err) => {
            print!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let config = Config::from_cli(cli);

    logging::init();
    terminal::install_panic_hook();

    // Every path out of `run_app` has already given the terminal back by the
    // time we print.
    match panic::catch_unwind(|| run_app(&config)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            tracing::error!(error = %err, "fatal error");
            println!("nvterm: {}", err);
            ExitCode::FAILURE
        }
        Err(_) => {
            println!("nvterm: fatal error (see {})", logging::log_path().display());
            ExitCode::FAILURE
        }
    }
}
