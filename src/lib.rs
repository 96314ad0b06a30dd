pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod identity;
pub mod ledger;
pub mod matchups;
pub mod ranking;
pub mod rating;
pub mod services;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::matchups::MatchupStore;
use crate::services::{LookupService, ProcessingService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_process(
    today: Option<NaiveDate>,
    cache_dir: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = AppConfig::new();
    if let Some(dir) = cache_dir {
        config.paths.cache_dir = dir;
    }
    if let Some(path) = output {
        config.paths.matchups_path = path;
    }

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = ProcessingService::new(config)?;
    service.run(today)
}

pub fn handle_matchups(name: Option<&str>, input: Option<PathBuf>) -> Result<()> {
    let path = input.unwrap_or_else(|| AppConfig::new().paths.matchups_path);
    let service = LookupService::new(MatchupStore::new(path));
    service.run(name)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
