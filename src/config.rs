//! Runtime channel configuration read from the environment.
//!
//! * `TYPED_LOG_LEVEL`: lowest severity left enabled (default `DEBUG`).
//! * `TYPED_LOG_DISABLE`: comma-separated severities to switch off regardless
//!   of the level, e.g. `verbose,info`.
//!
//! The process-wide configuration is read once, on first use of
//! [`env_config`], and then reused.

use std::env::{self, VarError};

use lazy_static::lazy_static;

use crate::error::ConfigError;
use crate::severity::Severity;

pub const LEVEL_VAR: &str = "TYPED_LOG_LEVEL";
pub const DISABLE_VAR: &str = "TYPED_LOG_DISABLE";

/// Which severities should have their runtime flag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub min_severity: Severity,
    pub disabled: Vec<Severity>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Debug,
            disabled: Vec::new(),
        }
    }
}

impl LogConfig {
    pub fn with_min_severity(min_severity: Severity) -> Self {
        Self {
            min_severity,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity && !self.disabled.contains(&severity)
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match env::var(var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
        })
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_VAR)? {
            if !level.trim().is_empty() {
                config.min_severity = parse_severity(LEVEL_VAR, &level)?;
            }
        }

        if let Some(disabled) = lookup(DISABLE_VAR)? {
            for name in disabled.split(',').filter(|name| !name.trim().is_empty()) {
                let severity = parse_severity(DISABLE_VAR, name)?;
                if !config.disabled.contains(&severity) {
                    config.disabled.push(severity);
                }
            }
        }

        Ok(config)
    }
}

fn parse_severity(var: &'static str, value: &str) -> Result<Severity, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidSeverity { var, source })
}

lazy_static! {
    static ref ENV_CONFIG: LogConfig = match LogConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid log configuration");
            LogConfig::default()
        }
    };
}

/// The configuration read from the environment, cached for the process.
///
/// An invalid environment is reported once through `tracing` and replaced by
/// the default configuration.
pub fn env_config() -> &'static LogConfig {
    &ENV_CONFIG
}
