use std::env;

use atty::Stream;

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod utility;

use crate::cli::build_cli;
use crate::config::Config;
use crate::error::{PigmixError, Result};

use pigmix::ansi::{Brush, Mode};

fn color_mode_from_environment() -> Option<Mode> {
    match env::var("PIGMIX_COLOR_MODE").ok().as_deref() {
        Some("24bit") => Some(Mode::TrueColor),
        Some("8bit") => Some(Mode::Ansi8Bit),
        Some("off") => None,
        _ => match env::var("COLORTERM").ok().as_deref() {
            Some("truecolor") | Some("24bit") => Some(Mode::TrueColor),
            _ => Some(Mode::Ansi8Bit),
        },
    }
}

fn run() -> Result<()> {
    let global_matches = build_cli().get_matches();

    let interactive_mode = atty::is(Stream::Stdout);

    let color_mode = if global_matches.get_flag("force-color") {
        Some(Mode::TrueColor)
    } else {
        match global_matches
            .get_one::<String>("color-mode")
            .expect("default argument")
            .as_str()
        {
            "24bit" => Some(Mode::TrueColor),
            "8bit" => Some(Mode::Ansi8Bit),
            "off" => None,
            // automatic detection: only use color on a tty
            "auto" => {
                if interactive_mode {
                    color_mode_from_environment()
                } else {
                    None
                }
            }
            _ => unreachable!("validated by clap"),
        }
    };

    let config = Config {
        interactive_mode,
        brush: Brush::from_mode(color_mode),
    };

    match global_matches.subcommand() {
        Some((name, matches)) => commands::run(name, matches, &config),
        None => unreachable!("subcommand is required"),
    }
}

fn main() {
    let result = run();
    match result {
        Err(PigmixError::StdoutClosed) => {}
        Err(err) => {
            eprintln!("[pigmix error] {}", err.message());
            std::process::exit(1);
        }
        Ok(()) => {}
    }
}
