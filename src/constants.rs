//! # Logger Constants
//!
//! Default values shared by the logger builder, the configuration module and the
//! process-wide facade. Keeping them in one place guarantees that a logger built
//! from an empty config file matches the lazily created default logger.

use crate::level::Level;

/// Minimum level of the default logger (everything passes)
pub const DEFAULT_LEVEL: Level = Level::Debug;

/// Records at or above this level get a stack trace attached
pub const DEFAULT_STACKTRACE_LEVEL: Level = Level::Error;

/// Timestamp layout used by the console and JSON encoders
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Message emitted by [`crate::sync`] once the flush attempt is over
pub const SYNC_MESSAGE: &str = "logger has been synced";

/// Process exit status used by fatal records
pub const FATAL_EXIT_CODE: i32 = 1;
