use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sloc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sloc"))
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.go", "package main\n\n// entry\nfunc main() {}\n");
    write(dir.path(), "web/app.js", "/* app */\nrun();\n");
    write(dir.path(), "web/node_modules/dep/index.js", "a();\nb();\nc();\n");
    write(dir.path(), "docs/manual.pdf", "%PDF\n");
    dir
}

#[test]
fn shows_help() {
    sloc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sloc"))
        .stdout(predicate::str::contains("--ignore"));
}

#[test]
fn prints_table_with_total() {
    let dir = project();
    sloc()
        .arg(dir.path())
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.go"))
        .stdout(predicate::str::contains("web/app.js"))
        .stdout(predicate::str::contains("│   Total      │ 3 │"))
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains("manual.pdf").not());
}

#[test]
fn brief_prints_only_total() {
    let dir = project();
    sloc().arg(dir.path()).arg("-b").assert().success().stdout("3\n");
}

#[test]
fn ignore_flag_prunes_directories() {
    let dir = project();
    sloc()
        .arg(dir.path())
        .args(["--brief", "-i", "web"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn no_default_ignore_descends_into_node_modules() {
    let dir = project();
    sloc()
        .arg(dir.path())
        .args(["--brief", "--no-default-ignore"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn json_output() {
    let dir = project();
    let output = sloc()
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 3);
    let paths: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, ["main.go", "web/app.js"]);
}

#[test]
fn empty_directory_is_silent() {
    let dir = TempDir::new().unwrap();
    sloc()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_root_fails() {
    let dir = TempDir::new().unwrap();
    sloc()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = project();
    sloc()
        .arg(dir.path())
        .args(["-b", "-v"])
        .assert()
        .success()
        .stdout("3\n")
        .stderr(predicate::str::contains("main.go: 2"));
}
