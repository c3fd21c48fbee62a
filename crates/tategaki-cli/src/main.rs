//! Tategaki CLI - render vertically written Japanese text from the command line

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tategaki::FontSearchPath;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let fonts = FontSearchPath::from_env_with_base(cli.font_dir.clone());

    let result = match &cli.command {
        Commands::Render(args) => commands::render::run(args, &fonts),
        Commands::Fonts(args) => commands::fonts::run(args, &fonts),
        Commands::Batch(args) => commands::batch::run(args, &fonts),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            // Bad input is distinguishable from everything else
            if e.is_invalid_parameter() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
