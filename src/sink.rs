use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::severity::Severity;

/// Destination for finished log lines.
///
/// Channels call [`LogSink::record`] synchronously, once per line that passes
/// their gates. What happens to the line afterwards (console, file, another
/// logging framework) is entirely up to the implementation, including how
/// write failures are handled: the caller never sees them.
///
/// # Usage
///
/// ```
/// # use typed_logger::{Channels, LogSink, Severity};
/// # use std::cell::RefCell;
/// // Collect lines into a vector
/// struct VecSink(RefCell<Vec<String>>);
///
/// impl LogSink for VecSink {
///     fn record(&self, severity: Severity, line: &str) {
///         self.0.borrow_mut().push(format!("{severity}: {line}"));
///     }
/// }
///
/// let sink = VecSink(RefCell::new(Vec::new()));
/// let channels: Channels = Channels::new(&sink);
/// channels.info.call("{} of {}", (3u32, "widgets"));
/// assert_eq!(sink.0.borrow()[0], "INFO: 3 of widgets");
/// ```
pub trait LogSink {
    fn record(&self, severity: Severity, line: &str);
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn record(&self, severity: Severity, line: &str) {
        (**self).record(severity, line);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn record(&self, severity: Severity, line: &str) {
        (**self).record(severity, line);
    }
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn record(&self, _severity: Severity, _line: &str) {}
}

/// Keeps every line in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines.lock().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<(Severity, String)> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Number of lines recorded with `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.lines
            .lock()
            .iter()
            .filter(|(recorded, _)| *recorded == severity)
            .count()
    }
}

impl LogSink for MemorySink {
    fn record(&self, severity: Severity, line: &str) {
        self.lines.lock().push((severity, line.to_owned()));
    }
}

/// Writes `SEVERITY: line` to any [`Write`] implementation, flushing after
/// every line.
///
/// I/O errors are swallowed and counted; see [`WriterSink::write_errors`].
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: Mutex<W>,
    errors: AtomicUsize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            errors: AtomicUsize::new(0),
        }
    }

    /// Number of lines that failed to write.
    pub fn write_errors(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_line(&self, severity: Severity, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{severity}: {line}")?;
        writer.flush()
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn record(&self, severity: Severity, line: &str) {
        if self.write_line(severity, line).is_err() {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Forwards lines to the `log` facade, so any `log` backend (log4rs,
/// env_logger, ...) can act as the final destination.
///
/// Severities map through [`Severity::to_log_level`].
#[derive(Debug, Clone, Copy)]
pub struct LogFacadeSink {
    target: &'static str,
}

impl LogFacadeSink {
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub const fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogFacadeSink {
    fn default() -> Self {
        Self::new("typed_logger")
    }
}

impl LogSink for LogFacadeSink {
    fn record(&self, severity: Severity, line: &str) {
        log::log!(target: self.target, severity.to_log_level(), "{}", line);
    }
}

/// Emits each line as a `tracing` event with target `typed_logger`.
///
/// Severities collapse the same way as [`Severity::to_tracing_level`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, severity: Severity, line: &str) {
        // Event levels must be constants, hence one arm per level.
        match severity {
            Severity::Debug => tracing::debug!(target: "typed_logger", "{}", line),
            Severity::Info | Severity::Verbose => {
                tracing::info!(target: "typed_logger", "{}", line)
            }
            Severity::Warning => tracing::warn!(target: "typed_logger", "{}", line),
            Severity::Error | Severity::Fatal => {
                tracing::error!(target: "typed_logger", "{}", line)
            }
        }
    }
}
