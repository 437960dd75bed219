//! Runtime settings read from the environment (and `.env`).
//!
//! - `LEDGER_SEED_FILE` - path of the seed file (default `ledger.toml`)
//! - `LEDGER_LOCALE` - `de` or `fa`, selects expense display names (default `de`)

use crate::{
    entities::Locale,
    errors::{Error, Result},
};
use std::{env, path::PathBuf};

/// Seed file used when `LEDGER_SEED_FILE` is unset.
pub const DEFAULT_SEED_FILE: &str = "ledger.toml";

/// Settings the binary starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Seed file to load, if it exists
    pub seed_path: PathBuf,
    /// Locale for expense display names
    pub locale: Locale,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    /// Returns an error if a variable is set but not valid unicode, or if
    /// `LEDGER_LOCALE` names an unsupported locale.
    pub fn from_env() -> Result<Self> {
        Self::from_values(read_var("LEDGER_SEED_FILE")?, read_var("LEDGER_LOCALE")?)
    }

    /// Builds settings from raw variable values, applying defaults for `None`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an unsupported locale.
    pub fn from_values(seed_path: Option<String>, locale: Option<String>) -> Result<Self> {
        let locale = match locale {
            Some(tag) => parse_locale(&tag)?,
            None => Locale::default(),
        };

        Ok(Self {
            seed_path: PathBuf::from(seed_path.unwrap_or_else(|| DEFAULT_SEED_FILE.to_string())),
            locale,
        })
    }
}

/// Parses a locale tag such as `"de"` or `"FA"`.
///
/// # Errors
/// Returns [`Error::Config`] for anything other than `de` or `fa`.
pub fn parse_locale(tag: &str) -> Result<Locale> {
    let normalized = tag.trim().to_lowercase();
    Locale::ALL
        .into_iter()
        .find(|locale| locale.tag() == normalized)
        .ok_or_else(|| Error::Config {
            message: format!("Unsupported locale '{normalized}' (expected 'de' or 'fa')"),
        })
}

fn read_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::EnvVar(e)),
    }
}
