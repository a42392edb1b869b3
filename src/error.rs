//! Error types for the configuration layer.
//!
//! Formatting and channel dispatch never fail at runtime; these errors only
//! come from parsing severity names and environment configuration.

use thiserror::Error;

/// A string did not name any [`Severity`](crate::Severity).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown severity `{name}`")]
pub struct ParseSeverityError {
    name: String,
}

impl ParseSeverityError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The text that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Errors raised while reading [`LogConfig`](crate::LogConfig) from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held something that is not a severity name.
    #[error("invalid value for {var}: {source}")]
    InvalidSeverity {
        var: &'static str,
        #[source]
        source: ParseSeverityError,
    },

    /// A variable was set but is not valid unicode.
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}
