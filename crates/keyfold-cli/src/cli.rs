use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "keyfold",
    about = "Keyfold — merge sparse integer-keyed vectors by summing shared keys",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge two pair sequences, summing values that share a key
    Merge(MergeArgs),
    /// Report fold counters without emitting merged pairs
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// Input file with both count-prefixed sequences (stdin when absent)
    pub input: Option<PathBuf>,
    /// Write merged pairs here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print a fold summary to stderr
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Input file with both count-prefixed sequences (stdin when absent)
    pub input: Option<PathBuf>,
}
