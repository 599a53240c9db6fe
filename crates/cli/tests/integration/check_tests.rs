//! `ppqs check` integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn check_valid_manifest() {
  let env = TestEnv::from_fixture("valid.toml");

  env
    .ppqs_cmd()
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("3 script(s) valid"))
    .stdout(predicate::str::contains("Commands: 5"));
}

#[test]
fn check_json() {
  let env = TestEnv::from_fixture("valid.toml");

  let output = env.ppqs_cmd().args(["check", "--format", "json"]).output().unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["valid"], true);
  assert_eq!(json["scripts"], 3);
  assert_eq!(json["project"], "demo-project");
}

#[cfg(unix)]
#[test]
fn check_rejects_absolute_path_argument() {
  let env = TestEnv::from_fixture("absolute_path.toml");

  env
    .ppqs_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("path argument '/etc/passwd' must be a relative path"));
}

#[test]
fn check_rejects_missing_section() {
  let env = TestEnv::from_fixture("no_scripts.toml");

  env
    .ppqs_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "does not contain a non-empty '[tool.ppqs.scripts]' section",
    ));
}

#[test]
fn check_rejects_unknown_key() {
  let env = TestEnv::from_fixture("unknown_key.toml");

  env
    .ppqs_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("script 'build' may not contain keys 'foo'"));
}

#[test]
fn check_error_names_manifest_path() {
  let env = TestEnv::from_fixture("bad_name.toml");

  env
    .ppqs_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains(format!("{}:", env.manifest_path.display())));
}

#[test]
fn check_malformed_manifest() {
  let env = TestEnv::empty();
  std::fs::write(&env.manifest_path, "[project\nname =").unwrap();

  env
    .ppqs_cmd()
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to parse manifest"));
}
