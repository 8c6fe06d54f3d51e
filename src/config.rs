//! Runtime configuration
//!
//! The original tool read `process.env` from inside each stage. Here the
//! environment is read exactly once, at startup, into an explicit
//! [`Config`] that the rest of the pipeline receives by reference.

use crate::error::{Error, Result};
use std::env;

/// Name of the credential variable
pub const TOKEN_VAR: &str = "CROWDIN_PERSONAL_TOKEN";
/// Name of the project id variable
pub const PROJECT_ID_VAR: &str = "CROWDIN_PROJECT_ID";
/// Name of the base URL variable
pub const BASE_URL_VAR: &str = "CROWDIN_BASE_URL";

/// Connection settings for the Crowdin API
#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token
    pub token: String,
    /// Numeric project identifier
    pub project_id: u64,
    /// API base URL, e.g. `https://api.crowdin.com/api/v2`
    pub base_url: String,
}

impl Config {
    /// Build a configuration from the process environment.
    ///
    /// The three variables are checked independently, in a fixed order;
    /// the first missing one aborts the run. An empty value counts as
    /// missing.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests inject a map instead of mutating
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = require_var(&lookup, TOKEN_VAR)?;
        let project_id_raw = require_var(&lookup, PROJECT_ID_VAR)?;
        let base_url = require_var(&lookup, BASE_URL_VAR)?;

        let project_id = project_id_raw
            .parse::<u64>()
            .map_err(|e| Error::InvalidVariable {
                name: PROJECT_ID_VAR,
                reason: e.to_string(),
            })?;

        url::Url::parse(&base_url).map_err(|e| Error::InvalidVariable {
            name: BASE_URL_VAR,
            reason: e.to_string(),
        })?;

        Ok(Self {
            token,
            project_id,
            base_url,
        })
    }
}

fn require_var(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String> {
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingVariable(name)),
    }
}
