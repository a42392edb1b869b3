//! # Typed Logger
//!
//! Type-inferring printf formatting and severity channels with compile-time
//! and runtime gates:
//!
//! * **No conversion codes at call sites**: each argument type carries its
//!   printf size modifier and conversion code in the [`ConversionTraits`]
//!   registry, resolved at compile time
//! * **Chainable formatting**: [`Formatter`] consumes one argument per call,
//!   with `hex`, `octal`, `scientific` and `general` overrides
//! * **Zero-cost disabled channels**: a channel whose compile-time gate is off
//!   compiles to nothing, argument evaluation included when called through
//!   [`channel_log!`] or [`Channel::call_with`]
//! * **Pluggable sinks**: finished lines go to any [`LogSink`], including the
//!   `log` facade and `tracing`
//!
//! ## Main Components
//!
//! * `conversion`: the type-conversion registry
//! * `directive` and `marker`: printf rendering and `{}` marker scanning
//! * `Formatter`: the chainable formatter
//! * `Channel` / `Channels`: per-severity channels and the six-channel bundle
//! * `sink`: the sink trait and the shipped sinks
//! * `config`: environment-driven runtime flags
//! * `subscriber`: `tracing-subscriber` setup helpers
//!
//! ## Quick Start
//!
//! ```
//! use typed_logger::{channel_log, Channels, Formatter, LogConfig, Severity, WriterSink};
//!
//! // Lines are written as "SEVERITY: text"
//! let sink = WriterSink::new(Vec::new());
//! let mut log: Channels = Channels::new(&sink);
//!
//! log.info.call("{} of {}", (3u32, "widgets"));
//! log.warning.call("status={:#} load={:.2}", (typed_logger::Hex(0xbeefu16), 0.755f64));
//! channel_log!(log.verbose, "flag={}", true);
//!
//! // Silence everything below WARNING
//! log.apply_config(&LogConfig::with_min_severity(Severity::Warning));
//! log.info.call("not recorded", ());
//!
//! drop(log);
//! let text = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(
//!     text,
//!     "INFO: 3 of widgets\nWARNING: status=0xbeef load=0.76\nVERBOSE: flag=1\n"
//! );
//!
//! // The formatter can also be used on its own
//! let line = Formatter::new("{}/{}").arg(-5i32).scientific(1500.0f32).finish();
//! assert_eq!(line, "-5/1.500000e+03");
//! ```

pub mod bundle;
pub mod channel;
pub mod config;
pub mod conversion;
pub mod directive;
pub mod error;
pub mod formatter;
mod marker;
pub mod severity;
pub mod sink;
pub mod subscriber;

pub use bundle::{BuildChannels, Channels, DEBUG_BUILD};
pub use channel::Channel;
pub use config::{env_config, LogConfig};
pub use conversion::{
    Canonical, ConversionTraits, Floating, General, Hex, Integral, Length, Octal, Scientific,
};
pub use directive::{Directive, Flags, Spec, MAX_FIELD};
pub use error::{ConfigError, ParseSeverityError};
pub use formatter::{FormatArgs, Formatter};
pub use marker::count_markers;
pub use severity::Severity;
pub use sink::{LogFacadeSink, LogSink, MemorySink, NullSink, TracingSink, WriterSink};
