// tests/test_handlers.rs
use std::sync::{Arc, Mutex};

use logs_ng::handlers::color::{COLOR_BLUE, COLOR_GREEN, COLOR_RED, COLOR_RESET, COLOR_YELLOW};
use logs_ng::handlers::{ColorHandler, Handler, TextHandler};
use logs_ng::{Attr, Config, Format, Level, Logger, Record, Sink, attrs};
use serde_json::Value;

fn memory_sink() -> (Sink, Arc<Mutex<Vec<u8>>>) {
    let buf: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    (Sink::shared(buf.clone()), buf)
}

fn contents(buf: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buf.lock().unwrap().clone()).unwrap()
}

fn text_logger(level: Level, color: bool) -> (Logger, Arc<Mutex<Vec<u8>>>) {
    let (sink, buf) = memory_sink();
    let logger = Logger::new(&Config {
        level,
        format: Format::Text,
        sink,
        color,
    });
    (logger, buf)
}

fn json_logger(level: Level) -> (Logger, Arc<Mutex<Vec<u8>>>) {
    let (sink, buf) = memory_sink();
    let logger = Logger::new(&Config {
        level,
        format: Format::Json,
        sink,
        color: false,
    });
    (logger, buf)
}

const ALL_LEVELS: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

#[test]
fn record_reaches_sink_iff_level_clears_threshold() {
    for threshold in ALL_LEVELS {
        for level in ALL_LEVELS {
            let (logger, buf) = text_logger(threshold, false);
            logger.log(level, "probe", vec![]);
            let emitted = !contents(&buf).is_empty();
            assert_eq!(
                emitted,
                level >= threshold,
                "threshold {threshold:?}, level {level:?}"
            );
        }
    }
}

#[test]
fn text_line_shape() {
    let (logger, buf) = text_logger(Level::Debug, false);
    logger.info("started", attrs!["port" => 8080, "host" => "local node"]);

    let out = contents(&buf);
    assert!(out.starts_with("time="), "line: {out}");
    assert!(out.contains(" level=INFO "), "line: {out}");
    assert!(out.contains(" msg=started"), "line: {out}");
    assert!(out.contains(" port=8080"), "line: {out}");
    // Values with spaces are quoted
    assert!(out.contains(" host=\"local node\""), "line: {out}");
    assert!(out.ends_with('\n'), "line: {out}");
}

#[test]
fn text_groups_become_dotted_prefixes() {
    let (logger, buf) = text_logger(Level::Debug, false);
    logger
        .with_group("db")
        .with(attrs!["pool" => "main"])
        .info("query done", attrs!["rows" => 3]);

    let out = contents(&buf);
    assert!(out.contains(" db.pool=main"), "line: {out}");
    assert!(out.contains(" db.rows=3"), "line: {out}");
}

#[test]
fn json_line_fields() {
    let (logger, buf) = json_logger(Level::Debug);
    logger.warn("cache miss", attrs!["key" => "user:12345", "ttl" => 300]);

    let out = contents(&buf);
    let v: Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(v["level"], "warn");
    assert_eq!(v["msg"], "cache miss");
    assert_eq!(v["key"], "user:12345");
    assert_eq!(v["ttl"], 300);
    assert!(v["time"].is_string());
}

#[test]
fn json_groups_nest_objects() {
    let (logger, buf) = json_logger(Level::Debug);
    logger
        .with_group("req")
        .with(attrs!["id" => "r-9"])
        .info("handled", attrs!["status" => 200]);

    let out = contents(&buf);
    let v: Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(v["req"]["id"], "r-9");
    assert_eq!(v["req"]["status"], 200);
}

#[test]
fn json_group_without_attrs_is_elided() {
    let (logger, buf) = json_logger(Level::Debug);
    logger.with_group("empty").info("plain", vec![]);

    let out = contents(&buf);
    let v: Value = serde_json::from_str(out.trim_end()).unwrap();
    assert!(v.get("empty").is_none(), "line: {out}");
}

#[test]
fn json_preserves_attribute_order() {
    let (logger, buf) = json_logger(Level::Debug);
    logger.info("ordered", attrs!["zebra" => 1, "alpha" => 2, "mike" => 3]);

    let out = contents(&buf);
    let z = out.find("\"zebra\"").unwrap();
    let a = out.find("\"alpha\"").unwrap();
    let m = out.find("\"mike\"").unwrap();
    assert!(z < a && a < m, "line: {out}");
}

#[test]
fn color_band_per_level() {
    let cases = [
        (Level::Debug, COLOR_BLUE),
        (Level::Info, COLOR_GREEN),
        (Level::Warn, COLOR_YELLOW),
        (Level::Error, COLOR_RED),
    ];
    for (level, code) in cases {
        let (logger, buf) = text_logger(Level::Debug, true);
        logger.log(level, "banded", vec![]);
        let out = contents(&buf);
        let framed = format!("{code}banded{COLOR_RESET}");
        assert!(out.contains(&framed), "level {level:?}, line: {out}");
    }
}

#[test]
fn json_never_contains_escape_codes() {
    let (sink, buf) = memory_sink();
    let logger = Logger::new(&Config {
        level: Level::Debug,
        format: Format::Json,
        sink,
        color: true,
    });
    logger.error("failure", attrs!["service" => "database"]);

    let out = contents(&buf);
    assert!(!out.contains('\x1b'), "line: {out}");
    assert!(serde_json::from_str::<Value>(out.trim_end()).is_ok());
}

#[test]
fn color_survives_derivation() {
    let (logger, buf) = text_logger(Level::Debug, true);
    let scoped = logger
        .with(attrs!["app" => "demo"])
        .with_group("worker")
        .with(attrs!["slot" => 2]);
    scoped.error("boom", vec![]);

    let out = contents(&buf);
    let framed = format!("{COLOR_RED}boom{COLOR_RESET}");
    assert!(out.contains(&framed), "line: {out}");
    assert!(out.contains(" app=demo"), "line: {out}");
    assert!(out.contains(" worker.slot=2"), "line: {out}");
}

#[test]
fn color_handler_leaves_caller_record_untouched() {
    let (sink, buf) = memory_sink();
    let handler = ColorHandler::new(Box::new(TextHandler::new(Level::Debug, sink)));
    let record = Record::new(Level::Warn, "original", vec![Attr::new("k", "v")], vec![]);

    handler.handle(&record).unwrap();

    assert_eq!(record.msg, "original");
    let out = contents(&buf);
    assert!(out.contains(&format!("{COLOR_YELLOW}original{COLOR_RESET}")));
}
