//! Update command - refresh the progress table in the target file

use crate::cli::style::{check, Stylize};
use anstream::{eprintln, println};
use crowdin_progress::config::Config;
use crowdin_progress::crowdin::{CrowdinClient, TranslationStatus};
use crowdin_progress::error::Result;
use crowdin_progress::types::{LanguageProgress, RenderOptions};
use crowdin_progress::{markdown, splice};
use std::path::PathBuf;

/// Arguments for the update command
#[derive(Debug, Clone)]
pub struct UpdateArgs {
    /// Target file containing the sentinel markers
    pub file: PathBuf,
    /// Threshold separating "Available" from "In progress"
    pub minimum_completion_percent: u8,
    /// Maximum cells per rendered table row
    pub languages_per_row: usize,
}

/// Run the update pipeline: validate, fetch, render, write.
pub async fn run_update(args: &UpdateArgs) -> Result<()> {
    println!("Checking environment variables...");
    let config = Config::from_env()?;

    println!("Retrieving translations progress from Crowdin...");
    let client = CrowdinClient::new(&config);
    let languages = fetch_or_empty(&client).await;

    for language in &languages {
        println!(
            "{} progress is {}",
            language.language_id, language.translation_progress
        );
    }

    println!("Generate Markdown table...");
    let options = RenderOptions {
        minimum_completion_percent: args.minimum_completion_percent,
        languages_per_row: args.languages_per_row,
    };
    let body = markdown::render(&languages, &options);

    println!("Writing to file {}", args.file.display().accent());
    splice::update_file(&args.file, &body)?;

    println!("{} {}", check(), "Done !".success());
    Ok(())
}

/// Fetch all languages, degrading a failed call to an empty list.
///
/// A fetch failure is not fatal: it is reported on stderr (label line plus
/// the full error) and the run continues with no languages, producing an
/// empty table region.
async fn fetch_or_empty(status: &dyn TranslationStatus) -> Vec<LanguageProgress> {
    match status.project_progress().await {
        Ok(languages) => languages,
        Err(err) => {
            eprintln!("{}", "translationStatusApi : ".error());
            eprintln!("{}", err.to_string().error());
            Vec::new()
        }
    }
}
