use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::core::error::LogsError;

/// Destination for rendered log lines. Cheap to clone; every clone writes
/// to the same underlying stream.
///
/// The inner mutex is what serializes concurrent appends: a line is
/// written and flushed in one critical section, so emissions from
/// different threads never interleave within a line.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<dyn Write + Send>>,
}

impl Sink {
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// Opens (or creates) `path` in append mode.
    pub fn file(path: impl AsRef<Path>) -> Result<Self, LogsError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(f))
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Wraps an already-shared writer. Useful when the caller needs to keep
    /// reading what was written, e.g. an `Arc<Mutex<Vec<u8>>>` buffer.
    pub fn shared(inner: Arc<Mutex<dyn Write + Send>>) -> Self {
        Self { inner }
    }

    /// Writes one newline-terminated line and flushes.
    pub fn write_line(&self, line: &str) -> Result<(), LogsError> {
        let mut w = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sink")
    }
}
