use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use menucast::error::{ConfigError, Error};
use menucast::infrastructure::config::settings::Config;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("menucast-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn load(toml: &str) -> menucast::error::Result<Config> {
    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);
    result
}

#[test]
fn config_loads_full_document() {
    let config = load(
        r#"
[server]
host = "0.0.0.0"
port = 8080

[data]
history_path = "data/history.csv"

[model]
path = "models/forest.json"

[calendar]
veg_special = ["2025-01-14", "2025-03-14"]
nonveg_special = []

[boost]
min = 1.2
max = 1.3
seed = 42

[features]
predict_reference_item = true

[logging]
level = "debug"
format = "json"
"#,
    )
    .expect("valid config");

    assert_eq!(config.server.socket_addr().unwrap().port(), 8080);
    assert_eq!(config.data.history_path, "data/history.csv");
    assert_eq!(config.model.path, "models/forest.json");
    assert_eq!(config.boost.seed, Some(42));
    assert!(config.features.predict_reference_item);
    assert_eq!(config.logging.format, "json");

    let dates = config.calendar.special_dates().unwrap();
    assert_eq!(dates.veg_dates().count(), 2);
    assert_eq!(dates.nonveg_dates().count(), 0);
}

#[test]
fn config_rejects_non_iso_special_date() {
    let result = load(
        r#"
[calendar]
nonveg_special = ["2024-11-20", "20th November"]
"#,
    );

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "calendar.nonveg_special",
            reason,
        })) => assert!(reason.contains("20th November")),
        Err(err) => panic!("Expected invalid calendar date error, got {err}"),
        Ok(_) => panic!("Expected invalid calendar date to be rejected"),
    }
}

#[test]
fn config_rejects_zero_port() {
    let result = load("[server]\nport = 0\n");

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "server.port",
                ..
            }))
        ),
        "Expected zero port to be rejected"
    );
}

#[test]
fn config_rejects_hostname_that_is_not_an_address() {
    let result = load("[server]\nhost = \"not a host\"\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "server.host",
            ..
        }))
    ));
}

#[test]
fn config_rejects_boost_below_one() {
    let result = load("[boost]\nmin = 0.5\nmax = 1.5\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "boost.min",
            ..
        }))
    ));
}

#[test]
fn config_rejects_empty_paths() {
    let result = load("[model]\npath = \"\"\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField { field: "model.path" }))
    ));
}

#[test]
fn missing_config_file_is_a_read_error() {
    let result = Config::load("/nonexistent/menucast.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}
