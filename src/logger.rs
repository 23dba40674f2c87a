//! # Logger Handle
//!
//! A [`Logger`] is one configured instance of the logging engine. It owns a private
//! `tracing` dispatcher built from a `tracing_subscriber::fmt` subscriber, so several
//! loggers with different levels, encodings and sinks can coexist in one process
//! without touching the global `tracing` subscriber.
//!
//! ## Record Layout
//!
//! Every record is a `tracing` event carrying:
//! - the message
//! - `severity`: only for `PANIC` and `FATAL`, which `tracing` emits at `ERROR`
//! - `caller`: the `file:line` of the code that called the logger
//! - `fields`: the structured fields as one JSON object
//! - `stacktrace`: a captured backtrace, at or above the stacktrace level
//!
//! ## Caller Attribution
//!
//! All logging methods are `#[track_caller]`. The location reported for a record is
//! the first frame outside this crate, so wrappers such as the process-wide facade
//! functions never show up as the call site.

use crate::config::Encoding;
use crate::constants::{
    DEFAULT_LEVEL, DEFAULT_STACKTRACE_LEVEL, FATAL_EXIT_CODE, TIMESTAMP_FORMAT,
};
use crate::error::{Error, Result};
use crate::field::{Field, FieldSet};
use crate::level::Level;
use crate::sink::Sink;
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use tracing::dispatcher::{self, Dispatch};
use tracing::field::display;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Local wall-clock timestamps with millisecond precision.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

struct Caller(&'static Location<'static>);

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0.file(), self.0.line())
    }
}

/// A configured logger.
///
/// Cloning is cheap: clones share the engine and the sink.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
    sink: Sink,
    level: Level,
    stacktrace_level: Option<Level>,
    caller: bool,
    context: Vec<Field>,
}

impl Logger {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Human-readable colored output on stdout, every level enabled, caller locations
    /// on every record and stack traces from `ERROR` up.
    pub fn development() -> Self {
        Builder::default().build()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// A child logger whose records start with `fields`.
    pub fn with_fields(&self, fields: impl IntoIterator<Item = Field>) -> Logger {
        let mut child = self.clone();
        child.context.extend(fields);
        child
    }

    /// Record `msg` at `level`.
    ///
    /// Unlike [`Logger::panic`] and [`Logger::fatal`], this never terminates, even at
    /// `Panic` or `Fatal`.
    #[track_caller]
    pub fn log(&self, level: Level, msg: impl AsRef<str>, fields: &[Field]) {
        self.emit(level, format_args!("{}", msg.as_ref()), fields, Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, msg: impl AsRef<str>, fields: &[Field]) {
        self.log(Level::Debug, msg, fields);
    }

    #[track_caller]
    pub fn info(&self, msg: impl AsRef<str>, fields: &[Field]) {
        self.log(Level::Info, msg, fields);
    }

    #[track_caller]
    pub fn warn(&self, msg: impl AsRef<str>, fields: &[Field]) {
        self.log(Level::Warn, msg, fields);
    }

    #[track_caller]
    pub fn error(&self, msg: impl AsRef<str>, fields: &[Field]) {
        self.log(Level::Error, msg, fields);
    }

    /// Record `msg`, then panic with `msg` as the payload.
    ///
    /// Panics even when `Panic` records are filtered out.
    #[track_caller]
    pub fn panic(&self, msg: impl AsRef<str>, fields: &[Field]) -> ! {
        let msg = msg.as_ref();
        self.log(Level::Panic, msg, fields);
        std::panic::panic_any(msg.to_string())
    }

    /// Record `msg`, flush the sink and exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, msg: impl AsRef<str>, fields: &[Field]) -> ! {
        self.log(Level::Fatal, msg, fields);
        self.exit()
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args, &[], Location::caller());
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args, &[], Location::caller());
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, args, &[], Location::caller());
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args, &[], Location::caller());
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Level::Fatal, args, &[], Location::caller());
        self.exit()
    }

    /// Flush anything the sink still buffers.
    pub fn sync(&self) -> Result<()> {
        self.sink.flush().map_err(Error::Flush)
    }

    fn exit(&self) -> ! {
        // The process is going away; nothing left to report a flush failure to
        let _ = self.sink.flush();
        std::process::exit(FATAL_EXIT_CODE)
    }

    fn emit(
        &self,
        level: Level,
        message: fmt::Arguments<'_>,
        fields: &[Field],
        location: &'static Location<'static>,
    ) {
        if !self.enabled(level) {
            return;
        }

        // Formatting may log through another logger; it must not run while this
        // dispatcher is the thread's current default
        let message = message.to_string();
        let severity = level.is_terminal().then(|| display(level));
        let caller = self.caller.then(|| display(Caller(location)));
        let fields = FieldSet::new(&self.context, fields);
        let fields = (!fields.is_empty()).then(|| display(fields));
        let stacktrace = self
            .stacktrace_level
            .filter(|threshold| level >= *threshold)
            .map(|_| display(Backtrace::force_capture()));

        macro_rules! record {
            ($lvl:expr) => {
                tracing::event!(
                    $lvl,
                    severity = severity,
                    caller = caller,
                    fields = fields,
                    stacktrace = stacktrace,
                    "{}",
                    message
                )
            };
        }

        dispatcher::with_default(&self.dispatch, || match level {
            Level::Debug => record!(tracing::Level::DEBUG),
            Level::Info => record!(tracing::Level::INFO),
            Level::Warn => record!(tracing::Level::WARN),
            Level::Error | Level::Panic | Level::Fatal => record!(tracing::Level::ERROR),
        });
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("stacktrace_level", &self.stacktrace_level)
            .field("caller", &self.caller)
            .field("sink", &self.sink)
            .field("context", &self.context)
            .finish()
    }
}

/// Builder for [`Logger`]. Defaults to the development configuration.
#[derive(Debug, Clone)]
pub struct Builder {
    level: Level,
    encoding: Encoding,
    color: bool,
    caller: bool,
    stacktrace_level: Option<Level>,
    sink: Sink,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            encoding: Encoding::Console,
            color: true,
            caller: true,
            stacktrace_level: Some(DEFAULT_STACKTRACE_LEVEL),
            sink: Sink::stdout(),
        }
    }
}

impl Builder {
    /// Minimum level written.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// ANSI colors for the console encoding. Ignored for JSON.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Attach the caller's `file:line` to every record.
    pub fn caller(mut self, caller: bool) -> Self {
        self.caller = caller;
        self
    }

    /// Attach a stack trace to records at or above `level`; `None` disables it.
    pub fn stacktrace(mut self, level: Option<Level>) -> Self {
        self.stacktrace_level = level;
        self
    }

    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    pub fn build(self) -> Logger {
        let builder = tracing_subscriber::fmt()
            .with_writer(self.sink.clone())
            .with_max_level(self.level.as_level_filter())
            .with_timer(LocalTime)
            .with_target(false)
            .with_level(true);

        let dispatch = match self.encoding {
            Encoding::Console => Dispatch::new(builder.with_ansi(self.color).finish()),
            Encoding::Json => Dispatch::new(builder.with_ansi(false).json().finish()),
        };

        Logger {
            dispatch,
            sink: self.sink,
            level: self.level,
            stacktrace_level: self.stacktrace_level,
            caller: self.caller,
            context: Vec::new(),
        }
    }
}
