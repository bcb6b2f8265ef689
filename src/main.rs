// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, Mode};
use std::process::ExitCode;
use tennis_scores::config::Settings;
use tennis_scores::error::exit_code;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Plain SQL output, no config or logging needed
    if args.mode() == Mode::Sql {
        commands::handle_sql_command();
        return ExitCode::SUCCESS;
    }

    let settings = match Settings::load().await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let _guard = match logging::setup_logging(&args, Some(&settings)).await {
        Ok((log_file_path, guard)) => {
            info!("Logs are written to: {log_file_path}");
            guard
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = commands::dispatch(&args, settings).await;
    if let Err(e) = &result {
        error!("Error: {e}");
    }

    ExitCode::from(exit_code(&result))
}
