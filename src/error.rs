//! Error types for the verb index.

use std::error::Error;
use std::fmt;

/// Result type defaulting to [`VerbError`].
pub type Result<T, E = VerbError> = std::result::Result<T, E>;

/// Errors raised while loading verb tables or resolving tense names.
///
/// Missing verbs and empty paradigm slots are not errors; queries report them
/// as `None`.
#[derive(Debug, thiserror::Error)]
pub enum VerbError {
    /// A tense name outside the twelve-slot schema.
    #[error(transparent)]
    UnknownTense(#[from] UnknownTenseError),

    /// Reading a verb table failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A JSON verb table could not be decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A tense name that is neither a canonical slot name nor a known alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTenseError {
    pub(crate) name: String,
}

impl UnknownTenseError {
    pub(crate) fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self { name: name.into() }
    }

    /// The rejected tense name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownTenseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnknownTenseError: '{}' is not a recognized tense", self.name)
    }
}

impl Error for UnknownTenseError {}
