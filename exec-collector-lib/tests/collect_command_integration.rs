//! Integration tests driving the command-line interface end to end.
//!
//! These tests run real child processes through `/bin/sh`, so they only run on
//! Unix hosts.

#![cfg(unix)]

use exec_collector_lib::Host;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test host that captures output to in-memory buffers.
#[derive(Debug, Default)]
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

const SETFILE: &str = r#"{
    "metric0": { "exec": "/bin/sh", "type": "string", "args": ["-c", "echo \"test\""] },
    "metric1": { "exec": "/bin/sh", "type": "int64", "args": ["-c", "echo  \"test:1775\" | awk -F':' '{printf $2}'"] },
    "metric3": { "exec": "/bin/sh", "type": "float64", "args": ["-c", "printf 3.55"] },
    "broken": { "exec": "/bin/sh", "type": "int64", "args": ["-c", "echo not-a-number"] }
}"#;

fn write_setfile(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("setfile.json");
    std::fs::write(&path, content).expect("Failed to write setfile");
    path
}

async fn run(host: &mut TestHost, setfile: &Path, args: &[&str]) -> exec_collector_lib::Result<()> {
    let setfile = setfile.to_str().expect("temp path is UTF-8");
    let mut argv = vec!["exec-collector", "--log-level", "none", "--setfile", setfile];
    argv.extend_from_slice(args);
    exec_collector_lib::run(host, argv).await
}

#[tokio::test]
async fn test_types_lists_every_metric_in_order() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);

    let mut host = TestHost::default();
    run(&mut host, &setfile, &["types"]).await.expect("types should succeed");

    let lines: Vec<_> = host.output_str().lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec!["/intel/exec/broken", "/intel/exec/metric0", "/intel/exec/metric1", "/intel/exec/metric3"]
    );
}

#[tokio::test]
async fn test_types_with_custom_namespace() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, r#"{"m": {"exec": "/bin/true", "type": "string"}}"#);

    let mut host = TestHost::default();
    run(&mut host, &setfile, &["--vendor", "acme", "--plugin", "sensors", "types"])
        .await
        .expect("types should succeed");

    assert_eq!(host.output_str(), "/acme/sensors/m\n");
}

#[tokio::test]
async fn test_collect_json_report() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);

    let mut host = TestHost::default();
    run(&mut host, &setfile, &["collect", "--format", "json", "metric0", "metric1", "/intel/exec/metric3"])
        .await
        .expect("collect should succeed");

    let report: serde_json::Value = serde_json::from_str(&host.output_str()).expect("report should be valid JSON");
    let metrics = report["metrics"].as_array().expect("metrics array");
    assert_eq!(metrics.len(), 3);

    assert_eq!(metrics[0]["namespace"], "/intel/exec/metric0");
    assert_eq!(metrics[0]["value"], "test\n");
    assert_eq!(metrics[1]["namespace"], "/intel/exec/metric1");
    assert_eq!(metrics[1]["value"], 1775);
    assert_eq!(metrics[1]["type"], "int64");
    assert_eq!(metrics[2]["value"], 3.55);
}

#[tokio::test]
async fn test_collect_all_skips_failures() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);

    let mut host = TestHost::default();
    run(&mut host, &setfile, &["collect", "--format", "json"])
        .await
        .expect("a failing metric should not fail the command");

    let report: serde_json::Value = serde_json::from_str(&host.output_str()).expect("report should be valid JSON");
    assert_eq!(report["metrics"].as_array().expect("metrics array").len(), 3);
    assert!(host.error_str().contains("Collected 3 of 4"), "stderr: {}", host.error_str());
}

#[tokio::test]
async fn test_collect_error_if_incomplete() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);

    let mut host = TestHost::default();
    let result = run(&mut host, &setfile, &["collect", "--error-if-incomplete", "metric0", "broken"]).await;
    assert!(result.is_err(), "an incomplete collection should fail");

    let mut host = TestHost::default();
    run(&mut host, &setfile, &["collect", "--error-if-incomplete", "metric0"])
        .await
        .expect("a complete collection should succeed");
}

#[tokio::test]
async fn test_collect_console_report_to_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);
    let report_path = dir.path().join("report.txt");

    let mut host = TestHost::default();
    run(
        &mut host,
        &setfile,
        &["collect", "--output", report_path.to_str().expect("UTF-8"), "metric1"],
    )
    .await
    .expect("collect should succeed");

    assert!(host.output_str().is_empty());
    let report = std::fs::read_to_string(&report_path).expect("report should be written");
    assert!(report.starts_with("METRIC"), "report: {report}");
    assert!(report.contains("/intel/exec/metric1  int64  1775"), "report: {report}");
}

#[tokio::test]
async fn test_collect_missing_setfile_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut host = TestHost::default();
    let result = run(&mut host, &dir.path().join("absent.json"), &["collect", "metric0"]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_collect_with_config_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);
    let config = dir.path().join("collector.toml");
    std::fs::write(&config, format!("setfile = {:?}\nexecution_timeout = 5\n", setfile.display().to_string()))
        .expect("Failed to write config");

    let mut host = TestHost::default();
    exec_collector_lib::run(
        &mut host,
        [
            "exec-collector",
            "--log-level",
            "none",
            "--config",
            config.to_str().expect("UTF-8"),
            "collect",
            "--format",
            "json",
            "metric3",
        ],
    )
    .await
    .expect("collect should succeed");

    let report: serde_json::Value = serde_json::from_str(&host.output_str()).expect("report should be valid JSON");
    assert_eq!(report["metrics"][0]["value"], 3.55);
}

#[tokio::test]
async fn test_collect_invalid_timeout_type_in_config() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);
    let config = dir.path().join("collector.toml");
    std::fs::write(&config, "execution_timeout = \"1\"\n").expect("Failed to write config");

    let mut host = TestHost::default();
    let result = run(
        &mut host,
        &setfile,
        &["--config", config.to_str().expect("UTF-8"), "collect", "metric0"],
    )
    .await;
    assert!(result.is_err(), "a string timeout should be rejected");
}

#[tokio::test]
async fn test_collect_named_metrics_reject_negative_timeout() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);
    let config = dir.path().join("collector.toml");
    std::fs::write(&config, "execution_timeout = -5\n").expect("Failed to write config");

    let mut host = TestHost::default();
    let result = run(
        &mut host,
        &setfile,
        &["--config", config.to_str().expect("UTF-8"), "collect", "--format", "json", "metric3"],
    )
    .await;

    assert!(result.is_err(), "a negative timeout should fail the whole batch");
    assert!(host.output_str().is_empty(), "no report should be written");
}

#[tokio::test]
async fn test_validate_reports_metric_count() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);

    let mut host = TestHost::default();
    run(&mut host, &setfile, &["validate"]).await.expect("validate should succeed");

    assert!(host.output_str().contains("Setfile is valid"));
    assert!(host.output_str().contains("Metrics: 4"));
    assert_eq!(host.exit_code, None);
}

#[tokio::test]
async fn test_validate_malformed_setfile() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, r#"{"metric0": {"exec": "/bin/sh"}}"#);

    let mut host = TestHost::default();
    let result = run(&mut host, &setfile, &["validate"]).await;

    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("validation failed"), "stderr: {}", host.error_str());
}

#[tokio::test]
async fn test_policy_lists_rules() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let setfile = write_setfile(&dir, SETFILE);

    let mut host = TestHost::default();
    run(&mut host, &setfile, &["policy"]).await.expect("policy should succeed");

    let output = host.output_str();
    assert!(output.contains("setfile (string, required): Configuration file"), "output: {output}");
    assert!(output.contains("execution_timeout (integer, optional) default=10: Execution timeout"), "output: {output}");
}
