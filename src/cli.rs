use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "TrueSkill leaderboard and matchups from cached brackets")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Replay cached tournaments, save matchups and print the leaderboard
    Process {
        /// Reference date for the activity window (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Directory holding one JSON file per tournament
        #[arg(long)]
        cache_dir: Option<PathBuf>,
        /// Where to write the matchup table
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a player's head-to-head record, or list all players
    Matchups {
        /// Player name (case-insensitive)
        name: Option<String>,
        /// Matchup table written by `process`
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
