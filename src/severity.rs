use std::fmt;
use std::str::FromStr;

use crate::error::ParseSeverityError;

/// Severity of a log line.
///
/// The declaration order is the rank order, so severities can be compared
/// and filtered directly: `Debug < Info < Verbose < Warning < Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Verbose,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Every severity, lowest rank first.
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Verbose,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Upper-case name, as printed by the shipped sinks.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Verbose => "VERBOSE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Closest `log` crate level. `Verbose` and `Fatal` have no direct
    /// counterpart and collapse onto `Info` and `Error`.
    pub const fn to_log_level(self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info | Severity::Verbose => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error | Severity::Fatal => log::Level::Error,
        }
    }

    /// Closest `tracing` level, collapsed the same way as [`Severity::to_log_level`].
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info | Severity::Verbose => tracing::Level::INFO,
            Severity::Warning => tracing::Level::WARN,
            Severity::Error | Severity::Fatal => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSeverityError::new(trimmed))
    }
}
