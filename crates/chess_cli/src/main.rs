//! Console chess
//!
//! Reads commands and moves from stdin, prints the board and messages to
//! stdout. Logs go to stderr, filtered by `RUST_LOG` or the `log_filter`
//! setting.

mod cli;
mod commands;
mod config;
mod display;
mod session;
mod uci;

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use session::{Flow, Session};

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    init_tracing(&config.log_filter);

    let stdout = io::stdout();
    let mut session = Session::new(config, stdout.lock())?;
    if let Some(path) = &cli.load {
        session
            .load(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
    }
    session.start()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        if session.handle_line(&line)? == Flow::Exit {
            break;
        }
        session.prompt()?;
    }
    Ok(())
}
