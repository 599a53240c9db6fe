//! `ppqs list` integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn list_discovers_manifest_from_nested_directory() {
  let env = TestEnv::from_fixture("valid.toml");

  env
    .ppqs_cmd()
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("Scripts for demo-project"))
    .stdout(predicate::str::contains("Run test script"))
    .stdout(predicate::str::contains("Build the documentation"));
}

#[test]
fn list_keeps_manifest_order() {
  let env = TestEnv::from_fixture("valid.toml");

  let output = env.ppqs_cmd().arg("list").output().unwrap();
  let stdout = String::from_utf8(output.stdout).unwrap();

  let names: Vec<_> = stdout
    .lines()
    .skip(1)
    .filter_map(|line| line.split_whitespace().next())
    .collect();
  assert_eq!(names, ["test", "lint", "docs"]);
}

#[test]
fn list_json_contains_commands() {
  let env = TestEnv::from_fixture("valid.toml");

  let output = env.ppqs_cmd().args(["list", "--format", "json"]).output().unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["project"], "demo-project");
  assert_eq!(json["scripts"]["test"]["commands"], serde_json::json!([["pytest", "-x", "tests"]]));
  assert_eq!(
    json["scripts"]["docs"]["commands"],
    serde_json::json!([["sphinx-build", "docs", "build/html"], ["echo", "done"]])
  );
}

#[cfg(unix)]
#[test]
fn list_json_joins_path_arguments() {
  let env = TestEnv::from_fixture("valid.toml");

  let output = env.ppqs_cmd().args(["list", "--format", "json"]).output().unwrap();
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(
    json["scripts"]["lint"]["commands"],
    serde_json::json!([["ruff", "check", "src/demo"], ["mypy", "src"]])
  );
}

#[test]
fn list_with_explicit_manifest() {
  let env = TestEnv::from_fixture("valid.toml");

  env
    .ppqs_cmd()
    .arg("list")
    .arg("--manifest")
    .arg(&env.manifest_path)
    .current_dir(env.temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("demo-project"));
}

#[test]
fn list_with_search_directory() {
  let env = TestEnv::from_fixture("valid.toml");

  env
    .ppqs_cmd()
    .arg("list")
    .arg("-C")
    .arg(env.nested_dir())
    .current_dir(env.temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains(env.manifest_path.display().to_string()));
}

#[test]
fn list_without_manifest_fails() {
  let env = TestEnv::empty();

  env
    .ppqs_cmd()
    .arg("list")
    .assert()
    .failure()
    .stderr(predicate::str::contains("could not be found"));
}

#[test]
fn list_rejects_invalid_script_name() {
  let env = TestEnv::from_fixture("bad_name.toml");

  env
    .ppqs_cmd()
    .arg("list")
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "script name 'bad_name' may not contain characters '_'",
    ));
}
