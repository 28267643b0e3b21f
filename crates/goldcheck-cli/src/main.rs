//! Goldcheck CLI: the `goldcheck` command.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::CorpusCheck {
            root,
            inputs_dir_name,
            expected_dir_name,
            json,
        } => commands::corpus_check::run(root, inputs_dir_name, expected_dir_name, json),

        Commands::ProfileResolve {
            registry,
            root,
            file,
        } => commands::profile_resolve::run(registry, root, file),
    }
}
