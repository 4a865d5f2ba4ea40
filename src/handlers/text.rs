use chrono::SecondsFormat;
use serde_json::Value;

use super::{BoundItem, Handler};
use crate::core::error::LogsError;
use crate::records::{Attr, Level, Record};
use crate::sinks::Sink;

/// Renders `time=... level=... msg=... key=value ...` lines. Group names
/// become dotted key prefixes (`db.query.rows=3`).
#[derive(Clone)]
pub struct TextHandler {
    level: Level,
    sink: Sink,
    bound: Vec<BoundItem>,
}

impl TextHandler {
    pub fn new(level: Level, sink: Sink) -> Self {
        Self {
            level,
            sink,
            bound: Vec::new(),
        }
    }
}

impl Handler for TextHandler {
    fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    fn handle(&self, record: &Record) -> Result<(), LogsError> {
        let mut line = String::with_capacity(96);
        line.push_str("time=");
        line.push_str(&record.ts.to_rfc3339_opts(SecondsFormat::Millis, true));
        line.push_str(" level=");
        line.push_str(&record.level.to_string());
        line.push_str(" msg=");
        push_token(&mut line, &record.msg);

        let mut path: Vec<&str> = Vec::new();
        for item in &self.bound {
            match item {
                BoundItem::Group(g) => path.push(g),
                BoundItem::Attr(a) => push_attr(&mut line, &path, a),
            }
        }

        let full: Vec<&str> = record.groups.iter().map(String::as_str).collect();
        for a in &record.attrs {
            push_attr(&mut line, &full, a);
        }

        self.sink.write_line(&line)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Box<dyn Handler> {
        let mut derived = self.clone();
        derived.bound.extend(attrs.into_iter().map(BoundItem::Attr));
        Box::new(derived)
    }

    fn with_group(&self, name: &str) -> Box<dyn Handler> {
        let mut derived = self.clone();
        derived.bound.push(BoundItem::Group(name.to_string()));
        Box::new(derived)
    }
}

fn push_attr(out: &mut String, path: &[&str], attr: &Attr) {
    out.push(' ');
    let mut key = String::new();
    for g in path {
        key.push_str(g);
        key.push('.');
    }
    key.push_str(&attr.key);
    push_token(out, &key);
    out.push('=');
    match &attr.value {
        Value::String(s) => push_token(out, s),
        other => push_token(out, &other.to_string()),
    }
}

// Quotes a token (JSON string escaping) only when leaving it bare would
// break `key=value` splitting. ANSI escapes pass through bare.
fn push_token(out: &mut String, s: &str) {
    let quote = s.is_empty() || s.contains(|c: char| c.is_whitespace() || c == '=' || c == '"');
    if quote {
        out.push_str(&Value::String(s.to_owned()).to_string());
    } else {
        out.push_str(s);
    }
}
