//! `ppqs show` integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn show_prints_commands_in_order() {
  let env = TestEnv::from_fixture("valid.toml");

  env
    .ppqs_cmd()
    .args(["show", "docs"])
    .assert()
    .success()
    .stdout(predicate::str::contains("docs: Build the documentation"))
    .stdout(predicate::str::is_match(r"(?s)sphinx-build docs build/html.*echo done").unwrap());
}

#[test]
fn show_json() {
  let env = TestEnv::from_fixture("valid.toml");

  let output = env
    .ppqs_cmd()
    .args(["show", "test", "--format", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(
    json,
    serde_json::json!({
      "name": "test",
      "description": "Run test script",
      "commands": [["pytest", "-x", "tests"]],
    })
  );
}

#[test]
fn show_unknown_script_lists_available() {
  let env = TestEnv::from_fixture("valid.toml");

  env
    .ppqs_cmd()
    .args(["show", "deploy"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("script 'deploy' not found"))
    .stderr(predicate::str::contains("test, lint, docs"));
}
