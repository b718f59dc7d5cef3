use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_xmldoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let input = std::fs::read_to_string(fixture_path("widgets.xml")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("widgets.expected.md")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    pretty_assertions::assert_eq!(output, expected);
}

#[test]
fn stdin_bitbucket_format() {
    let input = std::fs::read_to_string(fixture_path("widgets.xml")).unwrap();

    let assert = cmd()
        .args(["-f", "bitbucket"])
        .write_stdin(input)
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("<a name=\"tableofcontents\"></a>\n# Table of Contents\n"));
    assert!(output.contains("<a name=\"buttonclick\"></a>\n### Button.Click\n"));
}

#[test]
fn stdin_html_format() {
    let input = std::fs::read_to_string(fixture_path("widgets.xml")).unwrap();

    let assert = cmd().args(["-f", "html"]).write_stdin(input).assert().success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("<h4 id=\"Button-Click\">Button.Click</h4>"));
}

#[test]
fn stdin_json_format() {
    let input = std::fs::read_to_string(fixture_path("widgets.xml")).unwrap();

    let assert = cmd().args(["-f", "json"]).write_stdin(input).assert().success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("\"classes\""));
    assert!(output.contains("\"class_name\": \"Button\""));
}

#[test]
fn stdin_malformed_xml_fails() {
    let input = std::fs::read_to_string(fixture_path("broken.xml")).unwrap();

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse XML from stdin"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("widgets.xml"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("widgets.md")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("widgets.expected.md")).unwrap();
    pretty_assertions::assert_eq!(output, expected);
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("widgets.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_skips_malformed_input() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("broken.xml"))
        .arg(fixture_path("widgets.xml"))
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping malformed XML"));

    assert!(dir.path().join("widgets.md").exists());
    assert!(!dir.path().join("broken.md").exists());
}

#[test]
fn file_mode_scans_directories() {
    let input_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    std::fs::copy(fixture_path("widgets.xml"), input_dir.path().join("Lib.xml")).unwrap();
    std::fs::write(input_dir.path().join("notes.txt"), "ignored").unwrap();

    cmd()
        .args(["-o", out_dir.path().to_str().unwrap()])
        .arg(input_dir.path().to_str().unwrap())
        .assert()
        .success();

    assert!(out_dir.path().join("Lib.md").exists());
    assert!(!out_dir.path().join("notes.md").exists());
}

#[test]
fn file_mode_single_document_names() {
    for (format, file) in [
        ("markdown", "documentation.md"),
        ("bitbucket", "BitbucketDocumentation.md"),
        ("html", "documentation.html"),
        ("json", "documentation.json"),
    ] {
        let dir = TempDir::new().unwrap();

        cmd()
            .args(["-o", dir.path().to_str().unwrap()])
            .args(["-f", format, "--single"])
            .arg(fixture_path("widgets.xml"))
            .assert()
            .success();

        assert!(dir.path().join(file).exists(), "{format} should write {file}");
    }
}

// -- html stylesheet --

#[test]
fn html_writes_stylesheet() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "html"])
        .arg(fixture_path("widgets.xml"))
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("widgets.html")).unwrap();
    assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    let css = std::fs::read_to_string(dir.path().join("styles.css")).unwrap();
    assert!(css.contains(".sidebar"));
}

#[test]
fn html_keeps_existing_stylesheet() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("styles.css"), "/* custom */").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "html"])
        .arg(fixture_path("widgets.xml"))
        .assert()
        .success();

    let css = std::fs::read_to_string(dir.path().join("styles.css")).unwrap();
    assert_eq!(css, "/* custom */");
}

#[test]
fn html_no_stylesheet_flag() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "html", "--no-stylesheet"])
        .arg(fixture_path("widgets.xml"))
        .assert()
        .success();

    assert!(dir.path().join("widgets.html").exists());
    assert!(!dir.path().join("styles.css").exists());
}

#[test]
fn markdown_does_not_write_stylesheet() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("widgets.xml"))
        .assert()
        .success();

    assert!(!dir.path().join("styles.css").exists());
}

#[test]
fn invalid_format_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .arg(fixture_path("widgets.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
