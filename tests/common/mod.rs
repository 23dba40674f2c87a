#![allow(dead_code)]

use logfacade::{Level, Logger, Sink};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory writer shared between a sink and the test that inspects it.
#[derive(Clone, Default)]
pub struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
    fail_flush: bool,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capture whose `flush` always fails.
    pub fn failing_flush() -> Self {
        Self {
            fail_flush: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn sink(&self) -> Sink {
        Sink::new(self.clone())
    }

    /// Plain-text logger writing into this capture.
    pub fn logger(&self) -> Logger {
        Logger::builder()
            .level(Level::Debug)
            .color(false)
            .sink(self.sink())
            .build()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fail_flush {
            Err(io::Error::other("sink closed"))
        } else {
            Ok(())
        }
    }
}
