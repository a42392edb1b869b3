use std::fmt;

use crate::formatter::{FormatArgs, Formatter};
use crate::severity::Severity;
use crate::sink::LogSink;

/// A log channel for one severity.
///
/// A channel formats and forwards a line only when both of its gates are
/// open:
///
/// * `BUILD_ENABLED`, a const generic fixed when the channel type is chosen.
///   When it is `false` every call compiles down to nothing.
/// * the runtime flag, `true` on construction and changed with
///   [`Channel::set_enabled`].
///
/// The channel borrows its sink; the borrow checker ensures the sink outlives
/// every channel built from it.
///
/// # Argument evaluation
///
/// [`Channel::call`] and [`Channel::log`] receive already evaluated
/// arguments. To skip evaluation as well when a gate is closed, use
/// [`Channel::call_with`] or the [`channel_log!`](crate::channel_log) and
/// [`channel_log_if!`](crate::channel_log_if) macros.
///
/// # Examples
///
/// ```
/// # use typed_logger::{Channel, MemorySink, Severity};
/// let sink = MemorySink::new();
/// let mut warning: Channel = Channel::new(Severity::Warning, &sink);
///
/// warning.call("{} of {} failed", (3u32, "widgets"));
/// warning.set_enabled(false);
/// warning.call("dropped", ());
///
/// assert_eq!(sink.lines(), vec![(Severity::Warning, "3 of widgets failed".to_string())]);
/// ```
pub struct Channel<'s, const BUILD_ENABLED: bool = true> {
    severity: Severity,
    enabled: bool,
    sink: &'s dyn LogSink,
}

impl<'s, const BUILD_ENABLED: bool> Channel<'s, BUILD_ENABLED> {
    pub fn new(severity: Severity, sink: &'s dyn LogSink) -> Self {
        Self {
            severity,
            enabled: true,
            sink,
        }
    }

    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// The compile-time gate.
    pub const fn is_build_enabled(&self) -> bool {
        BUILD_ENABLED
    }

    /// The runtime gate.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether a call made now would reach the sink.
    #[inline(always)]
    pub const fn is_active(&self) -> bool {
        BUILD_ENABLED && self.enabled
    }

    pub fn sink(&self) -> &'s dyn LogSink {
        self.sink
    }

    /// Formats `args` into `fmt` and records the line, if both gates are open.
    #[inline]
    pub fn call<A: FormatArgs>(&self, fmt: &str, args: A) {
        if self.is_active() {
            self.write(fmt, args);
        }
    }

    /// Like [`Channel::call`], with an extra compile-time gate supplied by the
    /// call site.
    #[inline]
    pub fn log<const ENABLED: bool, A: FormatArgs>(&self, fmt: &str, args: A) {
        if ENABLED && self.is_active() {
            self.write(fmt, args);
        }
    }

    /// Like [`Channel::call`], but only evaluates `args` when both gates are open.
    #[inline]
    pub fn call_with<A, F>(&self, fmt: &str, args: F)
    where
        A: FormatArgs,
        F: FnOnce() -> A,
    {
        if self.is_active() {
            self.write(fmt, args());
        }
    }

    fn write<A: FormatArgs>(&self, fmt: &str, args: A) {
        let line = args.apply(Formatter::new(fmt)).finish();
        self.sink.record(self.severity, &line);
    }
}

impl<const BUILD_ENABLED: bool> fmt::Debug for Channel<'_, BUILD_ENABLED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("severity", &self.severity)
            .field("build_enabled", &BUILD_ENABLED)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Logs through a channel, evaluating the arguments only if the channel is
/// active.
///
/// ```
/// # use typed_logger::{channel_log, Channel, MemorySink, Severity};
/// let sink = MemorySink::new();
/// let info: Channel = Channel::new(Severity::Info, &sink);
/// let debug: Channel<false> = Channel::new(Severity::Debug, &sink);
///
/// let mut evaluated = false;
/// channel_log!(info, "{} of {}", 3u32, "widgets");
/// channel_log!(debug, "{}", { evaluated = true; 1u8 });
///
/// assert_eq!(sink.len(), 1);
/// assert!(!evaluated);
/// ```
#[macro_export]
macro_rules! channel_log {
    ($channel:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        let channel = &$channel;
        if channel.is_active() {
            channel.call($fmt, ($($arg,)*));
        }
    }};
}

/// Logs through a channel behind an additional compile-time condition.
///
/// `$enabled` must be a constant expression, typically built from `cfg!`.
/// When it is `false`, or the channel is inactive, nothing is evaluated.
///
/// ```
/// # use typed_logger::{channel_log_if, Channel, MemorySink, Severity};
/// let sink = MemorySink::new();
/// let verbose: Channel = Channel::new(Severity::Verbose, &sink);
///
/// channel_log_if!(cfg!(target_pointer_width = "16"), verbose, "{}", 1u8);
/// channel_log_if!(true, verbose, "kept {}", 2u8);
///
/// assert_eq!(sink.lines(), vec![(Severity::Verbose, "kept 2".to_string())]);
/// ```
#[macro_export]
macro_rules! channel_log_if {
    ($enabled:expr, $channel:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        const ENABLED: bool = $enabled;
        let channel = &$channel;
        if ENABLED && channel.is_active() {
            channel.log::<ENABLED, _>($fmt, ($($arg,)*));
        }
    }};
}
