use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::configs::Config;
use crate::core::error::LogsError;
use crate::records::{Attr, Ctx, Level};
use crate::sinks::Sink;

use super::Logger;

/// Process-wide cell: readers take an atomic snapshot of `active`; the
/// `last` mutex serializes writers and doubles as the lazy-init barrier.
struct GlobalLogs {
    active: ArcSwapOption<Logger>,
    last: Mutex<Config>,
}

static GLOBAL: Lazy<GlobalLogs> = Lazy::new(|| GlobalLogs {
    active: ArcSwapOption::const_empty(),
    last: Mutex::new(Config::default()),
});

fn last_config() -> MutexGuard<'static, Config> {
    GLOBAL.last.lock().unwrap_or_else(|e| e.into_inner())
}

// Caller holds the writer lock.
fn publish(cfg: Config, last: &mut Config) -> Arc<Logger> {
    let logger = Arc::new(Logger::new(&cfg));
    GLOBAL.active.store(Some(logger.clone()));
    *last = cfg;
    logger
}

/// (Re)configures the process-wide logger. Safe to call any number of
/// times; the last call wins.
pub fn init(cfg: Config) {
    let mut last = last_config();
    publish(cfg, &mut last);
}

/// Redirects output to an append-only file at `path`, preserving the last
/// active level, format, and color choice.
///
/// On failure the active logger is left untouched. The previously active
/// sink is not closed here; it stays open until the last logger holding it
/// is dropped. Callers that rotate sinks frequently own that leak.
pub fn set_sink_target(path: impl AsRef<Path>) -> Result<(), LogsError> {
    let sink = Sink::file(path)?;
    let mut last = last_config();
    let mut cfg = last.clone();
    cfg.sink = sink;
    publish(cfg, &mut last);
    Ok(())
}

/// Returns the current process-wide logger, building the default pipeline
/// on first use. Callers racing on that first use all observe the same
/// single chain. Components that prefer injection over a global can take
/// the returned [`Logger`] once at composition time and pass it down.
pub fn current() -> Logger {
    if let Some(l) = GLOBAL.active.load_full() {
        return (*l).clone();
    }
    let mut last = last_config();
    // Second look under the lock: another caller may have won the race.
    if let Some(l) = GLOBAL.active.load_full() {
        return (*l).clone();
    }
    let cfg = last.clone();
    (*publish(cfg, &mut last)).clone()
}

/// Derives a scoped logger from the process-wide one.
pub fn with(attrs: Vec<Attr>) -> Logger {
    current().with(attrs)
}

/// Derives a grouped logger from the process-wide one, for logical
/// scoping (e.g. "cli", "fileio").
pub fn with_group(name: &str) -> Logger {
    current().with_group(name)
}

pub fn debug(msg: &str, attrs: Vec<Attr>) {
    current().log(Level::Debug, msg, attrs);
}

pub fn info(msg: &str, attrs: Vec<Attr>) {
    current().log(Level::Info, msg, attrs);
}

pub fn warn(msg: &str, attrs: Vec<Attr>) {
    current().log(Level::Warn, msg, attrs);
}

pub fn error(msg: &str, attrs: Vec<Attr>) {
    current().log(Level::Error, msg, attrs);
}

pub fn debug_ctx(cx: &Ctx, msg: &str, attrs: Vec<Attr>) {
    current().log_ctx(cx, Level::Debug, msg, attrs);
}

pub fn info_ctx(cx: &Ctx, msg: &str, attrs: Vec<Attr>) {
    current().log_ctx(cx, Level::Info, msg, attrs);
}

pub fn warn_ctx(cx: &Ctx, msg: &str, attrs: Vec<Attr>) {
    current().log_ctx(cx, Level::Warn, msg, attrs);
}

pub fn error_ctx(cx: &Ctx, msg: &str, attrs: Vec<Attr>) {
    current().log_ctx(cx, Level::Error, msg, attrs);
}
