use std::sync::Arc;

use crate::configs::Config;
use crate::core::error::LogsError;
use crate::handlers::{self, Handler};
use crate::records::{Attr, Ctx, Level, Record};

/// A handle on a handler chain plus the group path opened so far.
/// Cloning is cheap and derivation is pure: `with`/`with_group` return a
/// new logger and leave the parent usable and unchanged.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
    groups: Vec<String>,
}

impl Logger {
    /// Builds a standalone logger for `cfg`. This is the composition-root
    /// constructor; the process-wide registry in [`super::global`] is a
    /// convenience layer over it.
    pub fn new(cfg: &Config) -> Self {
        Self {
            handler: Arc::from(handlers::build(cfg)),
            groups: Vec::new(),
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Emits if `level` clears the threshold. Best-effort: a failing sink
    /// drops the record. Use [`Logger::try_log`] to observe the failure.
    pub fn log(&self, level: Level, msg: &str, attrs: Vec<Attr>) {
        let _ = self.try_log(level, msg, attrs);
    }

    pub fn try_log(&self, level: Level, msg: &str, attrs: Vec<Attr>) -> Result<(), LogsError> {
        if !self.handler.enabled(level) {
            return Ok(());
        }
        let record = Record::new(level, msg, attrs, self.groups.clone());
        self.handler.handle(&record)
    }

    /// Like [`Logger::log`], with the context's ambient attributes merged
    /// ahead of the call-site ones.
    pub fn log_ctx(&self, cx: &Ctx, level: Level, msg: &str, attrs: Vec<Attr>) {
        if !self.handler.enabled(level) {
            return;
        }
        let mut merged = cx.attrs().to_vec();
        merged.extend(attrs);
        self.log(level, msg, merged);
    }

    pub fn debug(&self, msg: &str, attrs: Vec<Attr>) {
        self.log(Level::Debug, msg, attrs);
    }

    pub fn info(&self, msg: &str, attrs: Vec<Attr>) {
        self.log(Level::Info, msg, attrs);
    }

    pub fn warn(&self, msg: &str, attrs: Vec<Attr>) {
        self.log(Level::Warn, msg, attrs);
    }

    pub fn error(&self, msg: &str, attrs: Vec<Attr>) {
        self.log(Level::Error, msg, attrs);
    }

    pub fn debug_ctx(&self, cx: &Ctx, msg: &str, attrs: Vec<Attr>) {
        self.log_ctx(cx, Level::Debug, msg, attrs);
    }

    pub fn info_ctx(&self, cx: &Ctx, msg: &str, attrs: Vec<Attr>) {
        self.log_ctx(cx, Level::Info, msg, attrs);
    }

    pub fn warn_ctx(&self, cx: &Ctx, msg: &str, attrs: Vec<Attr>) {
        self.log_ctx(cx, Level::Warn, msg, attrs);
    }

    pub fn error_ctx(&self, cx: &Ctx, msg: &str, attrs: Vec<Attr>) {
        self.log_ctx(cx, Level::Error, msg, attrs);
    }

    /// Returns a logger carrying `attrs` on every future record.
    pub fn with(&self, attrs: Vec<Attr>) -> Logger {
        if attrs.is_empty() {
            return self.clone();
        }
        Logger {
            handler: Arc::from(self.handler.with_attrs(attrs)),
            groups: self.groups.clone(),
        }
    }

    /// Returns a logger that nests all subsequently bound and call-site
    /// attributes under `name`. An empty name is a no-op.
    pub fn with_group(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.clone();
        }
        let mut groups = self.groups.clone();
        groups.push(name.to_string());
        Logger {
            handler: Arc::from(self.handler.with_group(name)),
            groups,
        }
    }

    /// Whether two handles observe the same underlying handler chain.
    pub fn shares_chain(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}
