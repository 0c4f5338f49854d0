mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::Workspace;

fn menucast(ws: &Workspace) -> Command {
    let mut cmd = Command::cargo_bin("menucast").expect("binary built");
    cmd.current_dir(ws.root())
        .arg("--config")
        .arg(ws.path("config.toml"));
    cmd
}

#[test]
fn predict_prints_forecast_json() {
    let ws = Workspace::new();
    let output = menucast(&ws)
        .args(["predict", "--date", "2024-12-24"])
        .output()
        .expect("run menucast");

    assert!(output.status.success());
    let forecast: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(forecast["Veg Pulao"], 28);
    assert_eq!(forecast.as_object().unwrap().len(), 3);
}

#[test]
fn predict_rejects_bad_date_with_nonzero_exit() {
    let ws = Workspace::new();
    menucast(&ws)
        .args(["predict", "--date", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-date"));
}

#[test]
fn schema_lists_columns_in_order() {
    let ws = Workspace::new();
    menucast(&ws)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0\tcalendar\tday_of_week\n"))
        .stdout(predicate::str::contains("3\titem\titem_name_Dal Makhani\n"))
        .stdout(predicate::str::contains("day_Wednesday"))
        .stdout(predicate::str::contains("item_name_Biryani").not());
}

#[test]
fn export_features_writes_training_matrix() {
    let ws = Workspace::new();
    let out = ws.path("features.csv");
    menucast(&ws)
        .arg("export-features")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(out).unwrap();
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("day_of_week,veg_special,nonveg_special,item_name_Dal Makhani"));
    assert!(header.ends_with("quantity_made,quantity_sold,quantity_surplus"));
    assert_eq!(lines.count(), 28);
}

#[test]
fn missing_dataset_is_fatal() {
    let ws = Workspace::empty();
    ws.write_config("");
    menucast(&ws)
        .args(["predict", "--date", "2024-12-24"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("history.csv"));
}

#[test]
fn fatal_error_is_reported_once() {
    let ws = Workspace::empty();
    ws.write_config("");
    let output = menucast(&ws)
        .args(["predict", "--date", "2024-12-24"])
        .output()
        .expect("run menucast");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("failed to open dataset").count(), 1, "{stderr}");
}

#[test]
fn serve_rejects_port_zero_override() {
    let ws = Workspace::new();
    menucast(&ws)
        .args(["serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("server.port"));
}
