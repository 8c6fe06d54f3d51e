//! Markdown table rendering
//!
//! Languages are partitioned by a completion threshold into an
//! "Available" and an "In progress" section, each rendered as an HTML
//! table with a fixed number of cells per row.

use crate::types::{LanguageProgress, RenderOptions};
use std::fmt::Write as _;

/// Base URL for the per-language flag images
const FLAG_BASE_URL: &str =
    "https://raw.githubusercontent.com/benjaminjonard/crowdin-translations-progress-action/1.0/flags";

/// Split languages into `(available, in_progress)` by the threshold.
///
/// Relative order within each bucket follows the input; together the two
/// buckets are a complete partition of it.
pub fn partition(
    languages: &[LanguageProgress],
    minimum_completion_percent: u8,
) -> (Vec<LanguageProgress>, Vec<LanguageProgress>) {
    languages
        .iter()
        .cloned()
        .partition(|language| language.translation_progress >= minimum_completion_percent)
}

/// Render the full markdown body: the "Available" section followed by
/// the "In progress" section, either of which may be empty.
pub fn render(languages: &[LanguageProgress], options: &RenderOptions) -> String {
    let (available, in_progress) = partition(languages, options.minimum_completion_percent);

    let mut markdown = String::new();
    markdown += &table_section(&available, "Available", options.languages_per_row);
    markdown += &table_section(&in_progress, "In progress", options.languages_per_row);
    markdown
}

/// Render one titled table section; an empty bucket renders as nothing.
///
/// Rows are opened before the first cell and after every full row of
/// `languages_per_row` cells. A trailing partial row is left without its
/// closing tag, matching the tool's historical output. A zero row width
/// opens the first row and never closes anything; the CLI rejects zero
/// before it gets here.
fn table_section(languages: &[LanguageProgress], title: &str, languages_per_row: usize) -> String {
    if languages.is_empty() {
        return String::new();
    }

    let languages_per_row = languages_per_row.min(languages.len());

    let mut markdown = String::from("\n\n");
    markdown += &format!("#### {title}");
    markdown += "\n\n";
    markdown += "<table>";

    for (index, language) in languages.iter().enumerate() {
        let current = index + 1;
        if current == 1 || current.checked_rem(languages_per_row) == Some(1) {
            markdown += "<tr>";
        }

        let _ = write!(
            markdown,
            r#"<td align="center" valign="top"><img width="30px" height="30px" src="{FLAG_BASE_URL}/{}.png"></div><div align="center" valign="top">{}%</td>"#,
            language.language_id, language.translation_progress
        );

        if current.checked_rem(languages_per_row) == Some(0) {
            markdown += "</tr>";
        }
    }

    markdown += "</table>";
    markdown
}
