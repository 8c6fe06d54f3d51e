//! crowdin-progress
//!
//! CLI binary that splices Crowdin translation progress into a README.

use anyhow::Result;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "crowdin-progress")]
#[command(about = "Update a file's progress table from Crowdin translation status")]
#[command(version)]
struct Cli {
    /// File containing the sentinel markers to rewrite
    #[arg(long, env = "INPUT_FILE", default_value = "README.md")]
    file: PathBuf,

    /// Completion percentage at which a language counts as available
    #[arg(long, env = "INPUT_MINIMUM_COMPLETION_PERCENT", default_value_t = 60)]
    minimum_completion_percent: u8,

    /// Number of table cells per row (must be positive)
    #[arg(long, env = "INPUT_LANGUAGES_PER_ROW", default_value = "8")]
    languages_per_row: NonZeroUsize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = cli::UpdateArgs {
        file: cli.file,
        minimum_completion_percent: cli.minimum_completion_percent,
        languages_per_row: cli.languages_per_row.get(),
    };

    cli::run_update(&args).await?;

    Ok(())
}
