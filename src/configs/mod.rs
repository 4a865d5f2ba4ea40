use figment::{
    Figment,
    providers::{Env, Format as _, Json},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::LogsError;
use crate::records::Level;
use crate::sinks::Sink;

/// Output rendering selected by [`Config::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Json,
}

impl Default for Format {
    fn default() -> Self {
        Format::Text
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Text => "text",
            Format::Json => "json",
        })
    }
}

impl FromStr for Format {
    type Err = LogsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(LogsError::ConfigError(format!(
                "unrecognized log format: {other}"
            ))),
        }
    }
}

/// Runtime configuration. `color` only has effect when `format` is
/// [`Format::Text`]; the JSON formatter never carries escape codes.
#[derive(Debug, Clone)]
pub struct Config {
    pub level: Level,
    pub format: Format,
    pub sink: Sink,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: Format::Text,
            sink: Sink::stdout(),
            color: false,
        }
    }
}

/// File/env layer. Everything is optional; unknown `level`/`format`
/// strings fall back to the defaults instead of failing.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    level: Option<String>,
    format: Option<String>,
    file: Option<String>,
    color: Option<bool>,
}

impl Config {
    /// Merges an optional JSON file with `LOGS_NG_` environment variables.
    /// Fails if an explicitly given file is missing, or if the configured
    /// sink file cannot be opened.
    pub fn load(path: Option<&str>) -> Result<Self, LogsError> {
        let mut figment = Figment::new();
        if let Some(p) = path {
            if !std::path::Path::new(p).exists() {
                return Err(LogsError::ConfigError(format!(
                    "config file not found: {p}"
                )));
            }
            figment = figment.merge(Json::file(p));
        }

        let raw: RawConfig = figment
            .merge(Env::prefixed("LOGS_NG_"))
            .extract()
            .map_err(|e| LogsError::ConfigError(e.to_string()))?;
        raw.into_config()
    }
}

impl RawConfig {
    fn into_config(self) -> Result<Config, LogsError> {
        let sink = match &self.file {
            Some(p) => Sink::file(p)?,
            None => Sink::stdout(),
        };
        Ok(Config {
            level: self
                .level
                .as_deref()
                .and_then(|s| Level::from_str(s).ok())
                .unwrap_or_default(),
            format: self
                .format
                .as_deref()
                .and_then(|s| Format::from_str(s).ok())
                .unwrap_or_default(),
            sink,
            color: self.color.unwrap_or(false),
        })
    }
}
