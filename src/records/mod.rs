use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::core::error::LogsError;

/// Severity of a record. The derived order is total:
/// `Debug < Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

// Uppercase rendering, used by the text formatter.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        })
    }
}

impl FromStr for Level {
    type Err = LogsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(LogsError::ConfigError(format!(
                "unrecognized log level: {other}"
            ))),
        }
    }
}

/// One key/value pair attached to a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    /// Values that fail to serialize become `Value::Null` rather than an
    /// error; emission must never fail because of an odd attribute.
    pub fn new(key: impl Into<String>, value: impl Serialize) -> Self {
        Self {
            key: key.into(),
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }
}

/// One emitted event. Immutable once constructed; a handler that needs to
/// alter it (the color decorator does) works on a clone.
///
/// `attrs` holds the call-site attributes in insertion order. `groups` is
/// the group path they render under; attributes bound earlier via
/// `Logger::with` live in the derived handler chain and render ahead of
/// `attrs`.
#[derive(Debug, Clone)]
pub struct Record {
    pub ts: DateTime<Utc>,
    pub level: Level,
    pub msg: String,
    pub attrs: Vec<Attr>,
    pub groups: Vec<String>,
}

impl Record {
    pub fn new(
        level: Level,
        msg: impl Into<String>,
        attrs: Vec<Attr>,
        groups: Vec<String>,
    ) -> Self {
        Self {
            ts: Utc::now(),
            level,
            msg: msg.into(),
            attrs,
            groups,
        }
    }
}

/// Ambient attributes carried by the `*_ctx` emission variants, e.g. a
/// request or task scope. Merged ahead of call-site attributes, behind
/// logger-bound ones.
#[derive(Debug, Clone, Default)]
pub struct Ctx {
    attrs: Vec<Attr>,
}

impl Ctx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.attrs.push(Attr::new(key, value));
        self
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}
