use crate::channel::Channel;
use crate::config::LogConfig;
use crate::severity::Severity;
use crate::sink::LogSink;

/// `true` in builds with debug assertions.
pub const DEBUG_BUILD: bool = cfg!(debug_assertions);

/// The six severity channels, all writing to one sink.
///
/// Only the debug channel takes a compile-time gate (`DEBUG_ENABLED`) so
/// debug statements can be compiled out of optimized builds; the other five
/// are always compiled in. Every channel keeps its own runtime flag.
///
/// # Examples
///
/// ```
/// use typed_logger::{Channels, MemorySink, Severity};
///
/// let sink = MemorySink::new();
/// let mut log: Channels = Channels::new(&sink);
///
/// log.warning.call("{} of {}", (3u32, "widgets"));
/// log.set_enabled(Severity::Warning, false);
/// log.warning.call("suppressed", ());
///
/// assert_eq!(sink.lines(), vec![(Severity::Warning, "3 of widgets".to_string())]);
/// ```
#[derive(Debug)]
pub struct Channels<'s, const DEBUG_ENABLED: bool = true> {
    pub debug: Channel<'s, DEBUG_ENABLED>,
    pub info: Channel<'s>,
    pub verbose: Channel<'s>,
    pub warning: Channel<'s>,
    pub error: Channel<'s>,
    pub fatal: Channel<'s>,
}

/// Bundle whose debug channel follows the build profile.
pub type BuildChannels<'s> = Channels<'s, { DEBUG_BUILD }>;

impl<'s, const DEBUG_ENABLED: bool> Channels<'s, DEBUG_ENABLED> {
    pub fn new(sink: &'s dyn LogSink) -> Self {
        Self {
            debug: Channel::new(Severity::Debug, sink),
            info: Channel::new(Severity::Info, sink),
            verbose: Channel::new(Severity::Verbose, sink),
            warning: Channel::new(Severity::Warning, sink),
            error: Channel::new(Severity::Error, sink),
            fatal: Channel::new(Severity::Fatal, sink),
        }
    }

    /// Sets the runtime flag of the channel for `severity`.
    pub fn set_enabled(&mut self, severity: Severity, enabled: bool) {
        match severity {
            Severity::Debug => self.debug.set_enabled(enabled),
            Severity::Info => self.info.set_enabled(enabled),
            Severity::Verbose => self.verbose.set_enabled(enabled),
            Severity::Warning => self.warning.set_enabled(enabled),
            Severity::Error => self.error.set_enabled(enabled),
            Severity::Fatal => self.fatal.set_enabled(enabled),
        }
    }

    /// Runtime flag of the channel for `severity`.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Debug => self.debug.is_enabled(),
            Severity::Info => self.info.is_enabled(),
            Severity::Verbose => self.verbose.is_enabled(),
            Severity::Warning => self.warning.is_enabled(),
            Severity::Error => self.error.is_enabled(),
            Severity::Fatal => self.fatal.is_enabled(),
        }
    }

    /// Both gates of the channel for `severity`.
    pub fn is_active(&self, severity: Severity) -> bool {
        match severity {
            Severity::Debug => self.debug.is_active(),
            _ => self.is_enabled(severity),
        }
    }

    /// Sets every runtime flag from `config`.
    pub fn apply_config(&mut self, config: &LogConfig) {
        for severity in Severity::ALL {
            self.set_enabled(severity, config.is_enabled(severity));
        }
    }

    pub fn sink(&self) -> &'s dyn LogSink {
        self.info.sink()
    }
}
