//! Output streams for log records.
//!
//! A [`Sink`] is the writer half of a logger. Clones share the same underlying
//! writer behind a mutex; the fmt subscriber takes the lock once per record, so
//! lines written from different threads never interleave.

use std::fmt;
use std::io::{self, BufWriter, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
pub struct Sink {
    writer: SharedWriter,
    name: &'static str,
}

impl Sink {
    /// Wrap any writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named(writer, "custom")
    }

    pub fn stdout() -> Self {
        Self::named(io::stdout(), "stdout")
    }

    pub fn stderr() -> Self {
        Self::named(io::stderr(), "stderr")
    }

    /// Wrap a writer in a `BufWriter`. Output only reaches `writer` when the buffer
    /// fills or [`Sink::flush`] is called.
    pub fn buffered<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named(BufWriter::new(writer), "buffered")
    }

    fn named<W: Write + Send + 'static>(writer: W, name: &'static str) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            name,
        }
    }

    /// Write out anything still buffered.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    /// Whether both sinks write to the same underlying writer.
    pub fn same_writer(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        // A panic while formatting a record must not silence the logger for good
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}

/// Locked writer handed to the fmt subscriber for one record.
pub struct SinkWriter<'a> {
    guard: MutexGuard<'a, Box<dyn Write + Send>>,
}

impl Write for SinkWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.guard.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.guard.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.guard.flush()
    }
}

impl<'a> MakeWriter<'a> for Sink {
    type Writer = SinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter { guard: self.lock() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unbuffered_sink_writes_through() {
        let out = Shared::default();
        let sink = Sink::new(out.clone());

        sink.make_writer().write_all(b"hello\n").unwrap();
        assert_eq!(out.0.lock().unwrap().as_slice(), b"hello\n");
    }

    #[test]
    fn test_buffered_sink_holds_output_until_flush() {
        let out = Shared::default();
        let sink = Sink::buffered(out.clone());

        sink.make_writer().write_all(b"pending\n").unwrap();
        assert!(out.0.lock().unwrap().is_empty(), "output should still be buffered");

        sink.flush().unwrap();
        assert_eq!(out.0.lock().unwrap().as_slice(), b"pending\n");
    }

    #[test]
    fn test_clones_share_writer() {
        let sink = Sink::stdout();
        let clone = sink.clone();
        assert!(sink.same_writer(&clone));
        assert!(!sink.same_writer(&Sink::stdout()));
    }

    #[test]
    fn test_flush_reports_writer_errors() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::other("device gone"))
            }
        }

        let err = Sink::new(Broken).flush().unwrap_err();
        assert_eq!(err.to_string(), "device gone");
    }
}
