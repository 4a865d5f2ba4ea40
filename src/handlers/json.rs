use chrono::SecondsFormat;
use serde_json::Value;

use super::{BoundItem, Handler};
use crate::core::error::LogsError;
use crate::records::{Attr, Level, Record};
use crate::sinks::Sink;

/// Renders one JSON object per record, `{"time":...,"level":...,"msg":...}`
/// plus attributes, with group names introducing nested objects.
///
/// The object is written as a byte stream rather than through a map, so
/// attribute insertion order is preserved exactly and duplicate keys are
/// emitted as given. Individual keys and values still go through
/// `serde_json` for escaping.
#[derive(Clone)]
pub struct JsonHandler {
    level: Level,
    sink: Sink,
    bound: Vec<BoundItem>,
}

impl JsonHandler {
    pub fn new(level: Level, sink: Sink) -> Self {
        Self {
            level,
            sink,
            bound: Vec::new(),
        }
    }
}

impl Handler for JsonHandler {
    fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    fn handle(&self, record: &Record) -> Result<(), LogsError> {
        let mut line = JsonLine::new();
        line.field(
            "time",
            &Value::String(record.ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        line.field("level", &Value::String(record.level.as_str().to_owned()));
        line.field("msg", &Value::String(record.msg.clone()));

        let mut bound_groups = 0;
        for item in &self.bound {
            match item {
                BoundItem::Group(g) => {
                    line.push_group(g);
                    bound_groups += 1;
                }
                BoundItem::Attr(a) => line.attr(a),
            }
        }

        // Groups beyond those already opened by the bound context, for
        // records handed in directly with their own group path.
        for g in record.groups.iter().skip(bound_groups) {
            line.push_group(g);
        }
        for a in &record.attrs {
            line.attr(a);
        }

        self.sink.write_line(&line.finish())
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

/// Streaming writer for one JSON object. Groups open lazily, on the first
/// attribute inside them, so a group that never receives attributes is
/// elided from the output.
struct JsonLine {
    out: String,
    pending: Vec<String>,
    opened: usize,
}

impl JsonLine {
    fn new() -> Self {
        Self {
            out: String::from("{"),
            pending: Vec::new(),
            opened: 0,
        }
    }

    fn sep(&mut self) {
        if !self.out.ends_with('{') {
            self.out.push(',');
        }
    }

    fn push_group(&mut self, name: &str) {
        self.pending.push(name.to_owned());
    }

    fn open_pending(&mut self) {
        for g in std::mem::take(&mut self.pending) {
            self.sep();
            self.out.push_str(&json_str(&g));
            self.out.push_str(":{");
            self.opened += 1;
        }
    }

    fn field(&mut self, key: &str, value: &Value) {
        self.open_pending();
        self.sep();
        self.out.push_str(&json_str(key));
        self.out.push(':');
        self.out.push_str(&value.to_string());
    }

    fn attr(&mut self, attr: &Attr) {
        self.field(&attr.key, &attr.value);
    }

    fn finish(mut self) -> String {
        for _ in 0..self.opened {
            self.out.push('}');
        }
        self.out.push('}');
        self.out
    }
}

fn json_str(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}
