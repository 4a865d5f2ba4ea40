pub mod color;
pub mod json;
pub mod text;

pub use color::ColorHandler;
pub use json::JsonHandler;
pub use text::TextHandler;

use crate::configs::{Config, Format};
use crate::core::error::LogsError;
use crate::records::{Attr, Level, Record};

/// One stage of the rendering pipeline. Formatters implement it directly;
/// decorators own a boxed inner handler and delegate.
///
/// Derivation (`with_attrs`, `with_group`) is pure: it returns a new
/// handler and leaves `self` usable and unchanged.
pub trait Handler: Send + Sync {
    /// Whether a record at `level` would be emitted at all. Callers check
    /// this before building a record, so suppressed levels pay no
    /// formatting cost.
    fn enabled(&self, level: Level) -> bool;

    fn handle(&self, record: &Record) -> Result<(), LogsError>;

    /// Derives a handler that renders `attrs` ahead of every record's own
    /// attributes, under the groups opened so far.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Box<dyn Handler>;

    /// Derives a handler that nests all subsequently bound and call-site
    /// attributes under `name`.
    fn with_group(&self, name: &str) -> Box<dyn Handler>;
}

/// Context accumulated by handler derivation, in binding order. An
/// attribute token renders under the groups opened before it was bound;
/// call-site attributes render under the full group path.
#[derive(Debug, Clone)]
pub(crate) enum BoundItem {
    Attr(Attr),
    Group(String),
}

/// Builds the handler chain for `cfg`. Pure selection: JSON is never
/// color-wrapped, so escape codes cannot reach machine-readable output.
pub fn build(cfg: &Config) -> Box<dyn Handler> {
    match cfg.format {
        Format::Json => Box::new(JsonHandler::new(cfg.level, cfg.sink.clone())),
        Format::Text => {
            let base = TextHandler::new(cfg.level, cfg.sink.clone());
            if cfg.color {
                Box::new(ColorHandler::new(Box::new(base)))
            } else {
                Box::new(base)
            }
        }
    }
}
