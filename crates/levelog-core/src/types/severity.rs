//! Message severities and the threshold scale

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Severity of a log message, ordered by ascending verbosity.
///
/// A logger's threshold is a `Severity` too: a message passes when the
/// threshold is greater than or equal to the message's severity, so a
/// higher threshold lets more messages through.
///
/// `None` is only meaningful as a threshold and turns logging off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Severity {
    None = -1,
    Critical = 0,
    Error = 1,
    Warning = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Massive = 5,
}

impl Severity {
    /// Every severity, least verbose first
    pub const ALL: [Severity; 7] = [
        Severity::None,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Massive,
    ];

    /// Upper-case name, as reported by `Logger::threshold_label`
    pub fn name(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Massive => "MASSIVE",
        }
    }

    /// Fixed-width tag written after the timestamp of a leveled line.
    ///
    /// `None` never labels a message and maps to the empty string.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::None => "",
            Severity::Critical => "<CRITICAL> ",
            Severity::Error => "<ERROR>    ",
            Severity::Warning => "<WARNING>  ",
            Severity::Info => "<INFO>     ",
            Severity::Debug => "<DEBUG>    ",
            Severity::Massive => "<MASSIVE>  ",
        }
    }

    /// Numeric value on the -1..=5 scale
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Inverse of [`Severity::value`]
    pub fn from_value(value: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    /// Accepts a name in any case or the numeric value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i8>() {
            return Self::from_value(value)
                .ok_or_else(|| ConfigError::invalid_value("severity", s));
        }

        Self::ALL
            .into_iter()
            .find(|sev| sev.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::invalid_value("severity", s))
    }
}
