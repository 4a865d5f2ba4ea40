//! Process-wide structured logging: one configurable pipeline (level
//! threshold, text or JSON lines, optional ANSI color, a single sink),
//! shared across threads and reconfigurable at runtime.
//!
//! JSON output for log aggregators:
//!
//! ```no_run
//! use logs_ng::{Config, Format, Level, Sink};
//!
//! logs_ng::init(Config {
//!     level: Level::Info,
//!     format: Format::Json,
//!     sink: Sink::stdout(),
//!     color: false,
//! });
//!
//! logs_ng::info!("application started", "version" => "1.0.0", "env" => "production");
//! logs_ng::warn!("cache miss", "key" => "user:12345", "ttl" => 300);
//! ```
//!
//! Human-readable text output for development:
//!
//! ```no_run
//! use logs_ng::{Config, Format, Level, Sink};
//!
//! logs_ng::init(Config {
//!     level: Level::Debug,
//!     format: Format::Text,
//!     sink: Sink::stderr(),
//!     color: true,
//! });
//!
//! let log = logs_ng::with_group("fileio");
//! log.info("copy done", logs_ng::attrs!["src" => "a.txt", "dst" => "b.txt"]);
//! ```

pub mod configs;
pub mod core;
pub mod handlers;
pub mod loggers;
pub mod records;
pub mod sinks;

pub use configs::{Config, Format};
pub use crate::core::error::LogsError;
pub use loggers::{
    Logger, current, debug, debug_ctx, error, error_ctx, info, info_ctx, init, set_sink_target,
    warn, warn_ctx, with, with_group,
};
pub use records::{Attr, Ctx, Level, Record};
pub use sinks::Sink;
