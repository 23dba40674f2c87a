//! # logfacade - Process-Wide Structured Logging
//!
//! A thin facade over the `tracing` ecosystem that gives a whole program one shared
//! logger without any setup:
//!
//! ```no_run
//! use logfacade::Field;
//!
//! logfacade::info("listening", &[Field::new("port", 8080)]);
//! logfacade::warnf!("retrying in {}s", 5);
//! logfacade::sync();
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  global facade  │    │     Logger      │    │      Sink       │
//! │                 │    │                 │    │                 │
//! │ • default()     │───►│ • tracing       │───►│ • stdout/stderr │
//! │ • info()/...    │    │   Dispatch      │    │ • any io::Write │
//! │ • sync()        │    │ • caller/stack  │    │ • flush         │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 ▲
//!                        ┌─────────────────┐
//!                        │  LoggerConfig   │
//!                        │ • TOML settings │
//!                        └─────────────────┘
//! ```
//!
//! The shared logger is created lazily on first use with the development settings:
//! colored console output on stdout, every level enabled, caller locations on every
//! record and stack traces from `ERROR` up. Install a different one with
//! [`set_default`].

pub mod config;
pub mod constants;
pub mod error;
pub mod field;
mod global;
pub mod level;
pub mod logger;
pub mod sink;

pub use config::{Encoding, LoggerConfig, Output};
pub use error::{Error, Result};
pub use field::{Field, Value};
pub use global::{
    debug, debugf, default, error, errorf, fatalf, info, infof, logger, panic, set_default,
    sync, warn, warnf,
};
pub use level::Level;
pub use logger::{Builder, Logger};
pub use sink::Sink;
