// tests/test_configs.rs
//
// Config loading reads process environment variables, so these tests run
// one at a time and scrub the prefix before each run.
use std::env;
use std::sync::Mutex;

use logs_ng::{Config, Format, Level};

static GUARD: Mutex<()> = Mutex::new(());

const VARS: [&str; 4] = [
    "LOGS_NG_LEVEL",
    "LOGS_NG_FORMAT",
    "LOGS_NG_FILE",
    "LOGS_NG_COLOR",
];

fn scrub_env() {
    for var in VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn defaults_are_info_text_no_color() {
    let cfg = Config::default();
    assert_eq!(cfg.level, Level::Info);
    assert_eq!(cfg.format, Format::Text);
    assert!(!cfg.color);
}

#[test]
fn env_vars_override_defaults() {
    let _g = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    scrub_env();
    unsafe {
        env::set_var("LOGS_NG_LEVEL", "debug");
        env::set_var("LOGS_NG_FORMAT", "json");
        env::set_var("LOGS_NG_COLOR", "true");
    }

    let cfg = Config::load(None).unwrap();
    assert_eq!(cfg.level, Level::Debug);
    assert_eq!(cfg.format, Format::Json);
    assert!(cfg.color);

    scrub_env();
}

#[test]
fn malformed_level_and_format_fall_back() {
    let _g = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    scrub_env();
    unsafe {
        env::set_var("LOGS_NG_LEVEL", "verbose");
        env::set_var("LOGS_NG_FORMAT", "xml");
    }

    let cfg = Config::load(None).unwrap();
    assert_eq!(cfg.level, Level::Info);
    assert_eq!(cfg.format, Format::Text);

    scrub_env();
}

#[test]
fn missing_config_file_is_an_error() {
    let _g = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    scrub_env();

    assert!(Config::load(Some("/definitely/not/here.json")).is_err());
}

#[test]
fn file_config_parses_and_env_wins_over_file() {
    let _g = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    scrub_env();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logging.json");
    std::fs::write(&path, r#"{"level": "warn", "format": "json"}"#).unwrap();

    let cfg = Config::load(path.to_str()).unwrap();
    assert_eq!(cfg.level, Level::Warn);
    assert_eq!(cfg.format, Format::Json);

    unsafe { env::set_var("LOGS_NG_LEVEL", "error") };
    let cfg = Config::load(path.to_str()).unwrap();
    assert_eq!(cfg.level, Level::Error, "env must override the file");
    assert_eq!(cfg.format, Format::Json);

    scrub_env();
}

#[test]
fn file_key_opens_an_append_sink() {
    let _g = GUARD.lock().unwrap_or_else(|e| e.into_inner());
    scrub_env();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.log");
    unsafe { env::set_var("LOGS_NG_FILE", target.to_str().unwrap()) };

    let cfg = Config::load(None).unwrap();
    assert!(target.exists(), "loading the config should open the sink");
    drop(cfg);

    scrub_env();
}
