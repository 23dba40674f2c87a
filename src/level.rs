//! Severity levels.
//!
//! Levels are ordered `Debug < Info < Warn < Error < Panic < Fatal`. The first four
//! map one-to-one onto `tracing` levels. `tracing` has nothing above `ERROR`, so
//! `Panic` and `Fatal` records are emitted at `ERROR` and carry their real severity
//! in a `severity` field.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
    /// Logs, then unwinds the calling thread.
    Panic,
    /// Logs, then exits the process.
    Fatal,
}

impl Level {
    /// All levels from least to most severe.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
        Level::Fatal,
    ];

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    /// The `tracing` level a record at this severity is emitted at.
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error | Level::Panic | Level::Fatal => tracing::Level::ERROR,
        }
    }

    pub fn as_level_filter(self) -> LevelFilter {
        LevelFilter::from_level(self.as_tracing())
    }

    /// Whether records at this level terminate the thread or the process.
    pub fn is_terminal(self) -> bool {
        self > Level::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        };
        f.pad(name)
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_display_is_capitalized() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!(" Warning ".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("panic".parse::<Level>().unwrap(), Level::Panic);

        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_unknown_level() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(matches!(err, Error::UnknownLevel(ref name) if name == "verbose"));
        assert_eq!(err.to_string(), "unknown log level `verbose`");
    }

    #[test]
    fn test_terminal_levels_map_to_error() {
        assert_eq!(Level::Panic.as_tracing(), tracing::Level::ERROR);
        assert_eq!(Level::Fatal.as_tracing(), tracing::Level::ERROR);
        assert!(Level::Panic.is_terminal());
        assert!(!Level::Error.is_terminal());
        assert_eq!(Level::Debug.as_level_filter(), LevelFilter::DEBUG);
    }
}
