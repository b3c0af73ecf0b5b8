use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_validate_reports_missing_columns() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("fatebook-forecasts.csv"),
        "Forecast created by,Forecast (scale = 0-1)\nash,0.4\nash,\nbob,0.2\n",
    )
    .unwrap();

    Command::cargo_bin("forecast-stats")
        .unwrap()
        .arg("validate")
        .arg("--repo-root")
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(contains("Kept: 1"))
        .stdout(contains("Skipped, missing probability: 1"))
        .stdout(contains("Missing column: Question tags"));
}

#[test]
fn test_validate_json_ok() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("fatebook-forecasts.csv"),
        "Question title,Forecast created by,Forecast (scale = 0-1),Forecast created at,Resolution,Resolved at,Your Brier score for this question,Question tags\n\
         Q?,ash,0.4,2024-01-01,NO,2024-02-01,0.16,\n\
         Q?,ash,high,2024-01-01,NO,2024-02-01,,\n",
    )
    .unwrap();

    let out = Command::cargo_bin("forecast-stats")
        .unwrap()
        .args(["validate", "--format", "json", "--repo-root"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["rows_read"], 2);
    assert_eq!(v["kept"], 1);
    assert_eq!(v["invalid_probability"], 1);
    assert_eq!(v["missing_columns"], serde_json::json!([]));
}

#[test]
fn test_validate_missing_input() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("forecast-stats")
        .unwrap()
        .args(["validate", "--input", "nope.csv", "--repo-root"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(contains("nope.csv not found"));
}

#[test]
fn test_validate_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("forecast-stats")
        .unwrap()
        .args(["validate", "--format", "xml", "--repo-root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("invalid value 'xml'"));
}

#[test]
fn test_version() {
    Command::cargo_bin("forecast-stats")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
