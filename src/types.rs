//! Core types for crowdin-progress

use serde::Deserialize;

/// Per-language translation completion, as reported by Crowdin
///
/// Entries are immutable once deserialized; sorting and partitioning
/// produce new sequences rather than mutating in place.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProgress {
    /// Language identifier, matching the flag image naming convention
    pub language_id: String,
    /// Completion percentage, 0-100
    pub translation_progress: u8,
}

/// Rendering options for the markdown table
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Languages at or above this percentage land in the "Available"
    /// section; the rest in "In progress"
    pub minimum_completion_percent: u8,
    /// Maximum number of cells per table row
    pub languages_per_row: usize,
}
