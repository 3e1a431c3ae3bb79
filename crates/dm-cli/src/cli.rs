use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer section headers in extracted report text and emit clean markdown.
#[derive(Parser)]
#[command(name = "docmark")]
#[command(version)]
#[command(about = "Structural header inference for extracted Korean reports")]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep headers that sit next to other headers
    #[arg(long = "no-remove-consecutive", global = true)]
    pub no_remove_consecutive: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a single file
    File {
        input: PathBuf,
        /// Output path (default: <stem>_cleaned.md beside the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert every .md/.txt file under a directory
    Dir {
        root: PathBuf,
        /// Mirror outputs under this directory instead of writing beside inputs
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of files converted in parallel
        #[arg(short, long)]
        jobs: Option<usize>,
        /// Write the batch report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Read a document from stdin and write markdown to stdout
    Convert,
}
