use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "goldcheck",
    about = "Goldcheck: conformance checks for golden symbol-index corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run contract checks over every expected document in a corpus
    CorpusCheck {
        /// Corpus root directory
        #[arg(long, default_value = "corpus")]
        root: String,

        /// Name of each case's reference-inputs directory
        #[arg(long, default_value = "inputs")]
        inputs_dir_name: String,

        /// Name of each case's expected-documents directory
        #[arg(long, default_value = "expected")]
        expected_dir_name: String,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a file path to its language profile via the registry
    ProfileResolve {
        /// Path to the registry JSON document
        #[arg(long, default_value = "profiles/registry.json")]
        registry: String,

        /// Root the file path is made relative to before matching
        #[arg(long)]
        root: Option<String>,

        /// File path to resolve
        file: String,
    },
}
