//! CLI integration tests for every subcommand.
//!
//! Uses `assert_cmd` to spawn the `querylang` binary and verify
//! exit codes, stdout content, and stderr content. Sources are written to
//! temporary files so the tests do not depend on fixtures in the tree.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: create a Command for the `querylang` binary.
fn querylang() -> Command {
    cargo_bin_cmd!("querylang")
}

/// Helper: write `content` to a file named `name` inside `dir`.
fn source_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const BUGHATI: &str = "cReAte entity bughati{thing:string,thing2:string (unique),}";

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    querylang()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Querylang schema and chat parser"));
}

#[test]
fn version_exits_0() {
    querylang()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("querylang"));
}

// ──────────────────────────────────────────────
// 2. Entity subcommand
// ──────────────────────────────────────────────

#[test]
fn entity_text_output_lists_members() {
    let tmp = TempDir::new().unwrap();
    let path = source_file(&tmp, "bughati.ql", BUGHATI);
    querylang()
        .arg("entity")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("bughati.thing: string\n"))
        .stdout(predicate::str::contains("bughati.thing2: string (unique)"));
}

#[test]
fn entity_json_output_is_the_tree() {
    let tmp = TempDir::new().unwrap();
    let path = source_file(&tmp, "bughati.ql", BUGHATI);
    let out = querylang()
        .args(["--output", "json", "entity"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["name"]["name"], "bughati");
    assert_eq!(v["members"].as_array().unwrap().len(), 2);
    assert_eq!(v["members"][1]["constraints"][0], "Unique");
}

#[test]
fn entity_reads_stdin_with_dash() {
    querylang()
        .args(["entity", "-"])
        .write_stdin("create entity Empty{}")
        .assert()
        .success()
        .stderr(predicate::str::contains("entity 'Empty' with 0 member(s)"));
}

#[test]
fn entity_syntax_error_exits_1_with_position() {
    let tmp = TempDir::new().unwrap();
    let path = source_file(&tmp, "bad.ql", "create entity {thing:string}");
    querylang()
        .arg("entity")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "1:15: expected identifier, found '{'",
        ));
}

#[test]
fn entity_syntax_error_json_is_structured() {
    let tmp = TempDir::new().unwrap();
    let path = source_file(&tmp, "bad.ql", "create entity {thing:string}");
    let out = querylang()
        .args(["--output", "json", "entity"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&out.stderr).unwrap();
    assert_eq!(v["line"], 1);
    assert_eq!(v["column"], 15);
    assert_eq!(v["expected"], serde_json::json!(["Identifier"]));
    assert_eq!(v["found"]["kind"], "LBrace");
    assert!(v["file"].as_str().unwrap().ends_with("bad.ql"));
}

#[test]
fn quiet_suppresses_text_error_report() {
    let tmp = TempDir::new().unwrap();
    let path = source_file(&tmp, "bad.ql", "create entity");
    querylang()
        .args(["--quiet", "entity"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn entity_nonexistent_file_exits_1() {
    querylang()
        .args(["entity", "nonexistent_file_xyz.ql"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nonexistent_file_xyz.ql"));
}

#[test]
fn read_error_json_escapes_quotes_in_message() {
    let out = querylang()
        .args(["--output", "json", "entity", "no\"such\"file.ql"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&out.stderr).unwrap();
    assert!(v["error"].as_str().unwrap().contains("no\"such\"file.ql"));
}

// ──────────────────────────────────────────────
// 3. Chat subcommand
// ──────────────────────────────────────────────

#[test]
fn chat_prints_lines_in_order() {
    let tmp = TempDir::new().unwrap();
    let path = source_file(
        &tmp,
        "chat.txt",
        "john says \"hello\" \n michael says \"world\" \n",
    );
    querylang()
        .arg("chat")
        .arg(&path)
        .assert()
        .success()
        .stdout("john has said \"hello\"\nmichael has said \"world\"\n");
}

#[test]
fn chat_empty_input_is_valid() {
    querylang()
        .args(["--output", "json", "chat", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn chat_syntax_error_exits_1() {
    querylang()
        .args(["chat", "-"])
        .write_stdin("john hello\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected 'says'"));
}

// ──────────────────────────────────────────────
// 4. Tokens and fmt subcommands
// ──────────────────────────────────────────────

#[test]
fn tokens_lists_every_token() {
    querylang()
        .args(["tokens", "-"])
        .write_stdin("CREATE x")
        .assert()
        .success()
        .stdout("1:1 KeywordCreate \"CREATE\"\n1:8 Identifier \"x\"\n1:9 Eof \"\"\n");
}

#[test]
fn tokens_never_fail_on_unrecognized_input() {
    querylang()
        .args(["--output", "json", "tokens", "-"])
        .write_stdin("; \"open")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Error\""));
}

#[test]
fn fmt_prints_canonical_form() {
    querylang()
        .args(["fmt", "-"])
        .write_stdin(BUGHATI)
        .assert()
        .success()
        .stdout("create entity bughati {\n    thing: string,\n    thing2: string (unique),\n}\n");
}
