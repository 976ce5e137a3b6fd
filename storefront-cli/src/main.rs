mod args;
mod commands;
mod error;
mod paths;
mod screens;
mod settings;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use log::error;
use simplelog::Config;
use simplelog::WriteLogger;

use crate::args::Cli;
use crate::error::CliError;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let settings = Settings::load(&cli)?;
    init_logging(settings.level_filter()?)?;
    commands::run(cli.command, &settings).await
}

fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    let Some(log_file) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&log_file)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
