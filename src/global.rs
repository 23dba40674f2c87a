//! # Process-Wide Logger
//!
//! Free functions that log through one shared [`Logger`], so application code can
//! log without passing a handle around.
//!
//! ## Initialization
//!
//! [`default`] creates the development logger the first time it runs, exactly once
//! even when many threads race on first use. Every level function goes through
//! [`default`], so logging is always safe. [`logger`] only reads the slot and returns
//! `None` until something has been installed.
//!
//! ## Replacement
//!
//! [`set_default`] swaps the shared handle atomically but is not coordinated with
//! the first-use guard or with readers: the last writer wins, and calls already in
//! flight finish on the handle they loaded. Installing a logger before the first
//! [`default`] call means the development logger is never built.
//!
//! ## Caller Locations
//!
//! Every function here is `#[track_caller]`, so records point at the code calling
//! the facade rather than at this module.

use crate::constants::SYNC_MESSAGE;
use crate::field::Field;
use crate::logger::Logger;
use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

static DEFAULT_LOGGER: ArcSwapOption<Logger> = ArcSwapOption::const_empty();

/// The logger installed when the slot was first needed: whatever `set_default`
/// stored before that, otherwise the development logger built here.
static INIT: Lazy<Arc<Logger>> = Lazy::new(|| match DEFAULT_LOGGER.load_full() {
    Some(installed) => installed,
    None => {
        let logger = Arc::new(Logger::development());
        DEFAULT_LOGGER.store(Some(Arc::clone(&logger)));
        logger
    }
});

/// The shared logger, created on first use.
pub fn default() -> Arc<Logger> {
    let initial = Lazy::force(&INIT);
    DEFAULT_LOGGER
        .load_full()
        .unwrap_or_else(|| Arc::clone(initial))
}

/// Replace the shared logger.
pub fn set_default(logger: impl Into<Arc<Logger>>) {
    DEFAULT_LOGGER.store(Some(logger.into()));
}

/// The shared logger if one exists. Never creates it.
pub fn logger() -> Option<Arc<Logger>> {
    DEFAULT_LOGGER.load_full()
}

#[track_caller]
pub fn debug(msg: impl AsRef<str>, fields: &[Field]) {
    default().debug(msg, fields);
}

#[track_caller]
pub fn info(msg: impl AsRef<str>, fields: &[Field]) {
    default().info(msg, fields);
}

#[track_caller]
pub fn warn(msg: impl AsRef<str>, fields: &[Field]) {
    default().warn(msg, fields);
}

#[track_caller]
pub fn error(msg: impl AsRef<str>, fields: &[Field]) {
    default().error(msg, fields);
}

/// Log at `PANIC`, then panic with `msg`.
#[track_caller]
pub fn panic(msg: impl AsRef<str>, fields: &[Field]) -> ! {
    default().panic(msg, fields)
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default().debugf(args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default().infof(args);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default().warnf(args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default().errorf(args);
}

/// Log at `FATAL`, then exit the process with status 1.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default().fatalf(args)
}

/// Flush the shared logger.
///
/// A flush failure is logged at `ERROR` instead of being returned. Either way an
/// `INFO` record confirms the sync.
///
/// # Panics
///
/// Panics if no logger has been created or installed yet.
#[track_caller]
pub fn sync() {
    let Some(logger) = logger() else {
        panic!("logfacade::sync called before the default logger was initialized");
    };

    if let Err(e) = logger.sync() {
        error(e.to_string(), &[]);
    }
    info(SYNC_MESSAGE, &[]);
}

/// Log a formatted message at `DEBUG` through the shared logger.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::debugf(::core::format_args!($($arg)*))
    };
}

/// Log a formatted message at `INFO` through the shared logger.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)*) => {
        $crate::infof(::core::format_args!($($arg)*))
    };
}

/// Log a formatted message at `WARN` through the shared logger.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {
        $crate::warnf(::core::format_args!($($arg)*))
    };
}

/// Log a formatted message at `ERROR` through the shared logger.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::errorf(::core::format_args!($($arg)*))
    };
}

/// Log a formatted message at `FATAL` through the shared logger and exit.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {
        $crate::fatalf(::core::format_args!($($arg)*))
    };
}
