//! Workout tracker command-line shell.
//!
//! # Responsibility
//! - Parse arguments, set up logging, and own the store for one invocation.
//! - Route each subcommand to store operations; never issue SQL directly.

mod cli;
mod commands;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::error;
use render::Renderer;
use std::path::{Path, PathBuf};
use workout_core::{default_log_level, init_logging, DbError, WorkoutStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = resolve_log_dir(cli.log_dir.as_deref())?;
    let log_dir = log_dir
        .to_str()
        .context("log directory must be valid UTF-8")?;
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, log_dir).map_err(anyhow::Error::msg)?;

    let store = WorkoutStore::open(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let outcome = commands::run(&store, &cli.command, &Renderer::new(cli.json));
    finish(outcome, store.close())
}

/// Combines the command result with the close result. A command error wins
/// over a close error; the close error is then only logged.
fn finish(outcome: Result<()>, closed: Result<(), DbError>) -> Result<()> {
    match (outcome, closed) {
        (Err(err), closed) => {
            error!("event=command module=cli status=error error={}", err);
            if let Err(close_err) = closed {
                error!("event=db_close module=cli status=error error={}", close_err);
            }
            Err(err)
        }
        (Ok(()), closed) => closed.context("failed to close database"),
    }
}

fn resolve_log_dir(configured: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    Ok(match configured {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd.join("logs"),
    })
}
