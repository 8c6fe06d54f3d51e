//! crowdin-progress
//!
//! Fetches per-language translation completion from Crowdin, renders it
//! as a markdown/HTML table, and splices the table into a
//! sentinel-delimited region of a target file.
//!
//! The pipeline is strictly linear: validate configuration, fetch all
//! progress pages, render two threshold-partitioned sections, rewrite
//! the delimited region. A failed fetch degrades to an empty table
//! rather than aborting the run.

pub mod config;
pub mod crowdin;
pub mod error;
pub mod markdown;
pub mod splice;
pub mod types;
