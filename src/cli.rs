//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use todocheck::core::services::CommentMode;
use todocheck::output::OutputMode;

/// todocheck - Find TODO and ticket markers in comments
#[derive(Parser, Debug)]
#[command(
    name = "todocheck",
    version,
    about = "Generate TODO check reports",
    long_about = "Scan a source tree for comment lines containing TODO or a ticket reference.\n\n\
                  Matches are printed and written to HTML reports: one for the whole tree\n\
                  and one restricted to the modified files."
)]
pub struct Cli {
    /// Root directory of the project repository
    #[arg(short, long)]
    pub root: PathBuf,

    /// Destination folder for the HTML reports
    #[arg(short, long)]
    pub destination: PathBuf,

    /// Whitespace-separated list of modified files, relative to the root
    #[arg(short, long, required_unless_present = "staged", allow_hyphen_values = true)]
    pub modified: Option<String>,

    /// Also treat files staged in git as modified
    #[arg(long)]
    pub staged: bool,

    /// Config file (default: .todocheck.toml in the root, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ticket prefix matched as PREFIX-<digits>
    #[arg(long)]
    pub ticket_prefix: Option<String>,

    /// Comment recognition: per-line, block-aware
    #[arg(long)]
    pub comment_mode: Option<CommentMode>,

    /// Skip files that are not valid UTF-8 instead of replacing bad bytes
    #[arg(long)]
    pub strict_encoding: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::scan(&cli, output_mode)
}
