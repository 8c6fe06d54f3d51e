//! Sentinel-delimited file splicing
//!
//! The rendered table lives between two fixed comment markers inside the
//! target file. Each run rewrites every marker-delimited span with fresh
//! content and leaves everything outside the markers untouched. A file
//! without markers is written back unchanged; the markers are never
//! inserted on the tool's own initiative.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Opening sentinel line
pub const START_MARKER: &str = "<!-- CROWDIN-TRANSLATIONS-PROGRESS-ACTION-START -->";
/// Closing sentinel line
pub const END_MARKER: &str = "<!-- CROWDIN-TRANSLATIONS-PROGRESS-ACTION-END -->";

/// Replace every marker-delimited span in `contents` with `body`.
///
/// The replacement block is `START\n{body}\nEND`. Spans are located by
/// byte offset: each start marker pairs with the next end marker after
/// it; a start marker with no following end marker is left as-is.
pub fn splice(contents: &str, body: &str) -> String {
    let block = format!("{START_MARKER}\n{body}\n{END_MARKER}");

    let mut result = String::with_capacity(contents.len() + block.len());
    let mut rest = contents;

    while let Some(start) = rest.find(START_MARKER) {
        let after_start = start + START_MARKER.len();
        let Some(end) = rest[after_start..].find(END_MARKER) else {
            break;
        };
        let span_end = after_start + end + END_MARKER.len();

        result.push_str(&rest[..start]);
        result.push_str(&block);
        rest = &rest[span_end..];
    }

    result.push_str(rest);
    result
}

/// Rewrite the marker-delimited region of the file at `path`.
///
/// Fails with [`Error::MissingFile`] before touching anything if the file
/// does not exist. The whole file is rewritten even when the content is
/// unchanged.
pub fn update_file(path: &Path, body: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    let updated = splice(&contents, body);
    debug!(path = %path.display(), bytes = updated.len(), "writing spliced file");

    fs::write(path, updated).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}
