// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{io, process::ExitCode};

use clap::Parser;
use codestat::{
    app::{self, AppConfig},
    args::Args,
    presentation,
};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> anyhow::Result<()> {
    let config = AppConfig::from(Args::parse());
    init_logging(config.verbose);
    log::debug!("config: {}", serde_json::to_string(&config)?);

    let report = app::run(&config)?;
    let stdout = io::stdout();
    presentation::emit(&report, config.format, &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
