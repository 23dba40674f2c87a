//! Error type shared by logger handles, sinks and configuration loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by logger handles and logger configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The sink could not write out its buffered output.
    #[error("failed to flush log sink: {0}")]
    Flush(#[source] io::Error),

    #[error("failed to read logger config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write logger config {}: {source}", path.display())]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid logger config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("failed to serialize logger config: {0}")]
    SerializeConfig(#[from] toml::ser::Error),

    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
