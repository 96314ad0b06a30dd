use anyhow::Result;

use bracket_rankings::cli::Command;
use bracket_rankings::{handle_completions, handle_matchups, handle_process, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Process {
            today,
            cache_dir,
            output,
        } => handle_process(today, cache_dir, output),
        Command::Matchups { name, input } => handle_matchups(name.as_deref(), input),
        Command::Completions { shell } => handle_completions(shell),
    }
}
