// reword/tests/cli_integration_tests.rs
//! Integration tests driving the `reword` binary.
//!
//! Each test writes a JSON document (and sometimes a rule file) into a temporary
//! directory, runs the binary with `assert_cmd` and inspects stdout, stderr and the
//! document left on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "read_only": false,
  "elements": [
    { "id": 101, "kind": "room", "name": "Juice Bar" },
    { "id": 102, "kind": "room", "name": "Royal Nightclub" },
    { "id": 103, "kind": "sheet", "name": "A101 - Club Plan", "locked": true },
    { "id": 104, "kind": "view", "name": "Level 01" },
    { "id": 105, "kind": "type", "name": "Bar Stool" }
  ]
}
"#;

fn reword() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("reword"));
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("REWORD_CONFIG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

fn strip_ansi(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes::strip(bytes)).to_string()
}

fn names(path: &Path) -> Result<Vec<(u64, String)>> {
    let doc: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(doc["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| (e["id"].as_u64().unwrap(), e["name"].as_str().unwrap().to_string()))
        .collect())
}

#[test]
fn test_rename_with_default_rules() -> Result<()> {
    let dir = TempDir::new()?;
    let doc = write_file(&dir, "doc.json", DOCUMENT)?;

    let assert = reword()
        .args(["rename", "-D", doc.to_str().unwrap()])
        .assert()
        .success();
    let stdout = strip_ansi(&assert.get_output().stdout);
    let stderr = strip_ansi(&assert.get_output().stderr);

    assert!(stdout.contains("REFRESHMENT AREA"), "stdout:\n{}", stdout);
    assert!(stdout.contains("Renamed:   3"), "stdout:\n{}", stdout);
    assert!(stdout.contains("Failed:    1"), "stdout:\n{}", stdout);
    assert!(stderr.contains("Cannot change name for 103: element 103 is locked"), "stderr:\n{}", stderr);
    assert!(stderr.contains("'Batch Replace Words' committed."), "stderr:\n{}", stderr);

    let after = names(&doc)?;
    assert_eq!(
        after,
        vec![
            (101, "REFRESHMENT AREA".to_string()),
            (102, "GATHERING SPACE".to_string()),
            (103, "A101 - Club Plan".to_string()),
            (104, "Level 01".to_string()),
            (105, "REFRESHMENT AREA Stool".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_rename_keeps_fields_it_does_not_know() -> Result<()> {
    let dir = TempDir::new()?;
    let doc = write_file(
        &dir,
        "tower.json",
        r#"{"title":"Tower A","elements":[{"id":1,"kind":"room","name":"Juice Bar","level":"L01"}]}"#,
    )?;

    reword()
        .args(["rename", "-D", doc.to_str().unwrap(), "-q"])
        .assert()
        .success();

    let saved: Value = serde_json::from_str(&fs::read_to_string(&doc)?)?;
    assert_eq!(saved["title"], "Tower A");
    assert_eq!(saved["elements"][0]["level"], "L01");
    assert_eq!(saved["elements"][0]["name"], "REFRESHMENT AREA");
    Ok(())
}

#[test]
fn test_rename_only_selected_kinds() -> Result<()> {
    let dir = TempDir::new()?;
    let doc = write_file(&dir, "doc.json", DOCUMENT)?;

    reword()
        .args(["rename", "-D", doc.to_str().unwrap(), "--kinds", "type", "-q"])
        .assert()
        .success();

    let after = names(&doc)?;
    assert_eq!(after[0].1, "Juice Bar");
    assert_eq!(after[4].1, "REFRESHMENT AREA Stool");
    Ok(())
}

#[test]
fn test_read_only_document_is_rolled_back() -> Result<()> {
    let dir = TempDir::new()?;
    let content = DOCUMENT.replace("\"read_only\": false", "\"read_only\": true");
    let doc = write_file(&dir, "doc.json", &content)?;

    reword()
        .args(["rename", "-D", doc.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("document is read-only"))
        .stderr(predicate::str::contains("rolled back"));

    assert_eq!(fs::read_to_string(&doc)?, content);
    Ok(())
}

#[test]
fn test_dry_run_leaves_document_untouched() -> Result<()> {
    let dir = TempDir::new()?;
    let doc = write_file(&dir, "doc.json", DOCUMENT)?;

    reword()
        .args(["rename", "-D", doc.to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run: document not written."));

    assert_eq!(fs::read_to_string(&doc)?, DOCUMENT);
    Ok(())
}

#[test]
fn test_output_file_and_json_report() -> Result<()> {
    let dir = TempDir::new()?;
    let doc = write_file(&dir, "doc.json", DOCUMENT)?;
    let out = dir.path().join("renamed.json");

    let assert = reword()
        .args([
            "rename",
            "-D",
            doc.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--json",
            "-q",
        ])
        .assert()
        .success();

    let report: Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(report["summary"]["renamed"], 3);
    assert_eq!(report["summary"]["any_change_made"], true);
    assert_eq!(report["outcomes"].as_array().unwrap().len(), 5);
    assert_eq!(report["outcomes"][0]["entity_id"], 101);
    assert_eq!(report["outcomes"][3]["status"], "unchanged");

    assert_eq!(fs::read_to_string(&doc)?, DOCUMENT);
    assert_eq!(names(&out)?[1].1, "GATHERING SPACE");
    Ok(())
}

#[test]
fn test_ambiguous_rule_file_fails_before_touching_document() -> Result<()> {
    let dir = TempDir::new()?;
    let doc = write_file(&dir, "doc.json", DOCUMENT)?;
    let rules = write_file(
        &dir,
        "rules.yaml",
        "rules:\n  - match: BAR\n    replace_with: REFRESHMENT AREA\n  - match: bar\n    replace_with: PUB\n",
    )?;

    reword()
        .args(["rename", "-D", doc.to_str().unwrap(), "--config", rules.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("disagree on the replacement"));

    assert_eq!(fs::read_to_string(&doc)?, DOCUMENT);
    Ok(())
}

#[test]
fn test_missing_document_fails() {
    reword()
        .args(["rename", "-D", "/no/such/document.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read document"));
}

#[test]
fn test_preview_from_stdin() {
    let assert = reword()
        .args(["preview"])
        .write_stdin("Juice Bar\nLevel 01\nMusic\n")
        .assert()
        .success();

    let stdout = strip_ansi(&assert.get_output().stdout);
    let stderr = strip_ansi(&assert.get_output().stderr);
    assert_eq!(stdout, "REFRESHMENT AREA\nLevel 01\nMusic\n");
    assert!(stderr.contains("Line 3: '' is not a valid name; kept 'Music'"), "stderr:\n{}", stderr);
}

#[test]
fn test_preview_with_custom_rules() -> Result<()> {
    let dir = TempDir::new()?;
    let rules = write_file(
        &dir,
        "rules.yaml",
        "delete_token: ~\nrules:\n  - match: Dj\n    replace_with: \"-\"\n    case_sensitive: true\n",
    )?;
    let input = write_file(&dir, "names.txt", "Dj Booth\nDJ Booth\n")?;

    reword()
        .args([
            "preview",
            "--config",
            rules.to_str().unwrap(),
            "-i",
            input.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("- Booth\nDJ Booth\n");
    Ok(())
}

#[test]
fn test_rules_check() -> Result<()> {
    let dir = TempDir::new()?;
    let good = write_file(&dir, "good.yaml", "rules:\n  - match: CLUB\n    replace_with: LOUNGE AREA\n")?;
    let bad = write_file(&dir, "bad.yaml", "rules:\n  - match: ''\n    replace_with: X\n")?;

    reword()
        .args(["rules", "check", good.to_str().unwrap()])
        .assert()
        .success()
        .stdout("1\n");

    reword()
        .args(["rules", "check", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty match text"));
    Ok(())
}

#[test]
fn test_rules_list_default_table() {
    reword()
        .args(["rules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESTAURANT"))
        .stdout(predicate::str::contains("<delete>"))
        .stdout(predicate::str::contains("Forbidden characters: []{}:;,"));
}
