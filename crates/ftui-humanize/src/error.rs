//! Error taxonomy for interval humanization.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | Requested id and the whole fallback chain, default included, unregistered | `UnknownLocale` |
//! | Missing translation | No chain element provides a required key | `MissingTranslation` |
//! | Invalid options | `parts == Some(0)` and similar | Rejected before decomposition |
//! | Invalid interval | Mixed signs or overflow in signed construction | `InvalidInterval` |
//! | Bad locale data | Malformed JSON locale record | `LocaleData` |
//!
//! None of these are retried: formatting is pure, so a retry cannot change
//! the outcome.

use thiserror::Error;

/// Errors from humanization operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HumanizeError {
    /// Neither the requested locale nor any fallback (default included) is registered.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    /// A resolvable locale lacks a template after walking its whole chain.
    #[error("missing translation '{key}' for locale '{locale}'")]
    MissingTranslation { locale: String, key: String },
    /// Contradictory or out-of-range formatting options.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// An interval could not be built from the given components.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
    /// A locale record could not be decoded.
    #[error("locale data: {0}")]
    LocaleData(String),
}

impl HumanizeError {
    pub(crate) fn missing(locale: &str, key: impl Into<String>) -> Self {
        Self::MissingTranslation {
            locale: locale.to_string(),
            key: key.into(),
        }
    }
}

impl From<serde_json::Error> for HumanizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::LocaleData(err.to_string())
    }
}
