// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tally CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use tally::cli::Cli;
use tally::error::ExitCode;
use tally::scheduler::CancelToken;

mod cmd_run;

fn init_logging() {
    let filter = EnvFilter::try_from_env(tally::env::tally_log_var())
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tally: {:#}", e);
            match e.downcast_ref::<tally::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
        tracing::warn!("cannot install interrupt handler: {}", e);
    }

    cmd_run::run(&cli, &cancel)
}
