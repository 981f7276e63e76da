use assert_cmd::Command;
use predicates::str::contains;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample_audit.json")
}

/// Run inside an empty directory so no `.croreport.toml` is picked up.
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cro-report").unwrap();
    cmd.current_dir(dir.path()).env_remove("CRO_REPORT_STYLE");
    cmd
}

#[test]
fn generates_report_from_fixture() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.html");

    cmd(&dir)
        .arg("--input")
        .arg(fixture())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Report generated"))
        .stdout(contains("Example Outdoor Co."));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Executive Summary"));
    assert!(html.contains("Top Priority Findings"));
    assert!(html.contains("Cross-Cutting Issues"));
    assert!(html.contains("Prioritized Action Plan"));
    assert!(html.contains("2026-03-14"));
    assert!(html.contains("size guide &amp; care notes"));
    assert_eq!(html.matches("class=\"page-nav-link\"").count(), 3);
    assert!(html.contains("<section id=\"product-page\""));
    assert!(html.contains("<canvas id=\"chartPageScores\""));
}

#[test]
fn default_output_path_is_used() {
    let dir = TempDir::new().unwrap();

    cmd(&dir).arg("-i").arg(fixture()).assert().success();

    assert!(dir.path().join("cro_audit_report.html").exists());
}

#[test]
fn tables_style_has_no_canvas() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tables.html");

    cmd(&dir)
        .args(["--style", "tables", "--quiet"])
        .arg("-i")
        .arg(fixture())
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(!html.contains("<canvas"));
    assert!(!html.contains("chart.js"));
    assert!(html.contains("data-table"));
}

#[test]
fn output_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.html");
    let second = dir.path().join("b.html");

    for output in [&first, &second] {
        cmd(&dir)
            .arg("-i")
            .arg(fixture())
            .arg("-o")
            .arg(output)
            .arg("-q")
            .assert()
            .success();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn config_file_sets_title_and_style() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".croreport.toml"),
        "[general]\noutput = \"configured.html\"\n\n[report]\nstyle = \"tables\"\ntitle = \"Checkout Review\"\n",
    )
    .unwrap();

    cmd(&dir).arg("-i").arg(fixture()).assert().success();

    let html = std::fs::read_to_string(dir.path().join("configured.html")).unwrap();
    assert!(html.contains("<h1>Checkout Review</h1>"));
    assert!(!html.contains("<canvas"));
}

#[test]
fn malformed_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "{ \"pages\": [").unwrap();

    cmd(&dir)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.html"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("broken.json"));

    assert!(!dir.path().join("out.html").exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("no_such_dir").join("out.html");

    cmd(&dir)
        .arg("-i")
        .arg(fixture())
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to write report"));

    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["-i", "does_not_exist.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("does not exist"));
}

#[test]
fn empty_document_still_renders() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.json");
    std::fs::write(&input, "{}").unwrap();

    cmd(&dir)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg("empty.html")
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("empty.html")).unwrap();
    assert!(html.contains("Unknown"));
    assert!(html.contains("None identified."));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(contains(".croreport.toml"));

    let content = std::fs::read_to_string(dir.path().join(".croreport.toml")).unwrap();
    assert!(content.contains("[report]"));

    cmd(&dir).arg("--init-config").assert().failure().code(1);
}
