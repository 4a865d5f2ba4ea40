use super::Handler;
use crate::core::error::LogsError;
use crate::records::{Attr, Level, Record};

pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_GREEN: &str = "\x1b[32m";
pub const COLOR_BLUE: &str = "\x1b[34m";

/// Wraps another handler and injects ANSI color codes into the message
/// based on the record level. Only ever wraps the text formatter; the
/// chain builder keeps it away from JSON output.
pub struct ColorHandler {
    inner: Box<dyn Handler>,
}

impl ColorHandler {
    pub fn new(inner: Box<dyn Handler>) -> Self {
        Self { inner }
    }

    pub fn color_for(level: Level) -> &'static str {
        match level {
            Level::Error => COLOR_RED,
            Level::Warn => COLOR_YELLOW,
            Level::Info => COLOR_GREEN,
            Level::Debug => COLOR_BLUE,
        }
    }
}

impl Handler for ColorHandler {
    fn enabled(&self, level: Level) -> bool {
        self.inner.enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<(), LogsError> {
        // Work on a copy; the caller's record stays untouched.
        let mut rec = record.clone();
        rec.msg = format!("{}{}{}", Self::color_for(rec.level), rec.msg, COLOR_RESET);
        self.inner.handle(&rec)
    }

    // Derivation re-wraps, so color survives arbitrarily deep
    // with/with_group chains.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Box<dyn Handler> {
        Box::new(ColorHandler {
            inner: self.inner.with_attrs(attrs),
        })
    }

    fn with_group(&self, name: &str) -> Box<dyn Handler> {
        Box::new(ColorHandler {
            inner: self.inner.with_group(name),
        })
    }
}
