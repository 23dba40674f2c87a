//! # Logger Configuration
//!
//! Declarative description of a [`Logger`], stored as TOML so it can live next to
//! the rest of an application's settings and be edited by hand.
//!
//! ## Design Philosophy
//!
//! 1. **Every key optional**: a missing key takes the development default, so an
//!    empty file builds the same logger as [`crate::default`]
//! 2. **Strict values**: an unknown level or encoding is an error, never silently
//!    replaced
//! 3. **Fail-safe loading**: [`LoggerConfig::load_or_default`] never stops a program
//!    from starting because of a broken config file
//!
//! ## Example
//!
//! ```toml
//! level = "info"
//! encoding = "json"
//! output = "stderr"
//! stacktrace_level = "panic"
//! ```

use crate::constants::{DEFAULT_LEVEL, DEFAULT_STACKTRACE_LEVEL};
use crate::error::{Error, Result};
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Sink;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Record encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Human-readable single-line records
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

/// Where records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
}

/// Logger settings
///
/// ## Field Descriptions
///
/// - `level`: minimum level written
/// - `encoding`: console or JSON records
/// - `color`: ANSI-colored level names (console encoding only)
/// - `caller`: attach the caller's `file:line`
/// - `stacktrace`: attach stack traces at all
/// - `stacktrace_level`: lowest level that gets a stack trace
/// - `output`: standard output or standard error
/// - `buffered`: buffer output until it is synced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: Level,
    pub encoding: Encoding,
    pub color: bool,
    pub caller: bool,
    pub stacktrace: bool,
    pub stacktrace_level: Level,
    pub output: Output,
    pub buffered: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            encoding: Encoding::Console,
            color: true,
            caller: true,
            stacktrace: true,
            stacktrace_level: DEFAULT_STACKTRACE_LEVEL,
            output: Output::Stdout,
            buffered: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Like [`LoggerConfig::load`], but falls back to the defaults when the file is
    /// missing or invalid.
    ///
    /// No logger exists yet at this point, so problems go to stderr.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Falling back to default logger config: {}", e);
                Self::default()
            }
        }
    }

    /// Write the config as pretty-printed TOML, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let write_err = |source: std::io::Error| Error::WriteConfig {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)
    }

    fn sink(&self) -> Sink {
        match (self.output, self.buffered) {
            (Output::Stdout, false) => Sink::stdout(),
            (Output::Stderr, false) => Sink::stderr(),
            (Output::Stdout, true) => Sink::buffered(std::io::stdout()),
            (Output::Stderr, true) => Sink::buffered(std::io::stderr()),
        }
    }

    pub fn build(&self) -> Logger {
        Logger::builder()
            .level(self.level)
            .encoding(self.encoding)
            .color(self.color)
            .caller(self.caller)
            .stacktrace(self.stacktrace.then_some(self.stacktrace_level))
            .sink(self.sink())
            .build()
    }
}
