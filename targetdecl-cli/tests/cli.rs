//! End-to-end CLI tests over a manifest on disk.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn targetdecl() -> Command {
    Command::cargo_bin("targetdecl").expect("targetdecl binary")
}

fn create_project(manifest: &str) -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    fs::write(td.path().join("targets.toml"), manifest).expect("write manifest");
    td
}

const GOOD_MANIFEST: &str = r#"
schema = "targetdecl.manifest.v1"

[[target]]
name = "Raider"
category = "game"
settings_version = "v2"
extra_modules = ["RaiderCore"]

[[target]]
name = "RaiderEditor"
category = "editor"
settings_version = "v2"
extra_modules = ["RaiderCore", "RaiderTools"]
"#;

#[test]
fn list_prints_declared_targets() {
    let temp = create_project(GOOD_MANIFEST);

    targetdecl()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Raider")
                .and(predicate::str::contains("RaiderEditor"))
                .and(predicate::str::contains("category=game")),
        );
}

#[test]
fn list_json_is_parseable() {
    let temp = create_project(GOOD_MANIFEST);

    let assert = targetdecl()
        .current_dir(temp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn describe_shows_the_declaration() {
    let temp = create_project(GOOD_MANIFEST);

    targetdecl()
        .current_dir(temp.path())
        .args(["describe", "RaiderEditor"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("category: editor")
                .and(predicate::str::contains("RaiderTools")),
        );
}

#[test]
fn validate_succeeds_on_a_clean_manifest() {
    let temp = create_project(GOOD_MANIFEST);

    targetdecl()
        .current_dir(temp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 targets valid"));
}

#[test]
fn validate_exits_2_on_duplicate_module() {
    let temp = create_project(
        r#"
[[target]]
name = "Raider"
category = "game"
settings_version = "v2"
extra_modules = ["A", "B", "A"]
"#,
    );

    targetdecl()
        .current_dir(temp.path())
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("duplicate extra module `A`"));
}

#[test]
fn validate_exits_2_on_missing_settings_version() {
    let temp = create_project(
        r#"
[[target]]
name = "Raider"
category = "game"
"#,
    );

    targetdecl()
        .current_dir(temp.path())
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("settings version is not set"));
}

#[test]
fn seed_prints_convention_module_first() {
    let temp = create_project(GOOD_MANIFEST);

    targetdecl()
        .current_dir(temp.path())
        .args([
            "seed",
            "Raider",
            "--platform",
            "win64",
            "--configuration",
            "shipping",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed for Raider (win64/shipping)"));
}

#[test]
fn seed_json_matches_the_wire_schema() {
    let temp = create_project(GOOD_MANIFEST);

    let assert = targetdecl()
        .current_dir(temp.path())
        .args([
            "seed",
            "Raider",
            "--platform",
            "linux",
            "--configuration",
            "development",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(parsed["schema"], "targetdecl.seed.v1");
    assert_eq!(parsed["modules"][0], "Raider");
    assert_eq!(parsed["modules"][1], "RaiderCore");
}

#[test]
fn seed_rejects_malformed_params() {
    let temp = create_project(GOOD_MANIFEST);

    targetdecl()
        .current_dir(temp.path())
        .args([
            "seed",
            "Raider",
            "--platform",
            "win64",
            "--configuration",
            "shipping",
            "--param",
            "not-a-pair",
        ])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_manifest_is_a_tool_error() {
    let td = tempfile::tempdir().expect("tempdir");

    targetdecl()
        .current_dir(td.path())
        .arg("list")
        .assert()
        .failure()
        .code(1);
}
