use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "devmeter",
    version,
    about = "Rotten Tomatoes-style hireability rating for developer profiles"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory searched for devmeter.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a prepared profile record
    Score(ScoreCommand),
    /// Assemble a raw profile snapshot, then score it
    Analyze(AnalyzeCommand),
    /// Print the focus areas detected in a snapshot's repositories
    Focus(FocusCommand),
    /// Print the effective category weights
    Weights,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Reference time (RFC 3339) used instead of the system clock
    #[arg(long)]
    pub now: Option<String>,
    /// Exit with code 1 when the percentage is below 50
    #[arg(long)]
    pub fail_below: bool,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Reference time (RFC 3339) used instead of the system clock
    #[arg(long)]
    pub now: Option<String>,
    /// Exit with code 1 when the percentage is below 50
    #[arg(long)]
    pub fail_below: bool,
}

#[derive(Args)]
pub struct FocusCommand {
    pub file: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
