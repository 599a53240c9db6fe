//! Validation of the `[tool.ppqs.scripts]` section.
//!
//! Each entry of the section is a script. Its value takes one of three forms:
//!
//! ```toml
//! [tool.ppqs.scripts]
//! build = "cargo build\ncargo test"                    # string, one command per line
//! lint = [["ruff", "check", ["src", "pkg"]]]           # list of argument lists
//! docs = { description = "Build docs", script = "..." } # structured
//! ```
//!
//! Inside a list of argument lists, an argument that is itself a list is a
//! path given as segments; it is joined and must stay relative.

mod commands;
mod types;

pub use commands::parse_command_text;
pub use types::*;

use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::Value;
use tracing::debug;

use crate::consts::{SCRIPTS_SECTION, TOOL_NAMESPACE};
use crate::manifest::RawManifest;
use commands::{parse_commands, scalar_to_string};

/// Keys allowed in the structured form of a script.
pub const SCRIPT_KEYS: &[&str] = &["description", "script"];

/// Errors raised while validating the scripts section.
#[derive(Debug, Error)]
pub enum ScriptError {
  /// The scripts section violates the schema.
  #[error("{}: {message}", path.display())]
  InvalidScript { path: PathBuf, message: String },

  /// A key the manifest must always provide is missing or mistyped.
  #[error("{}: missing required key '{key}'", path.display())]
  Structure { path: PathBuf, key: &'static str },
}

impl ScriptError {
  /// The manifest the error refers to.
  pub fn path(&self) -> &Path {
    match self {
      ScriptError::InvalidScript { path, .. } | ScriptError::Structure { path, .. } => path,
    }
  }
}

fn invalid(path: &Path, message: impl Into<String>) -> ScriptError {
  ScriptError::InvalidScript {
    path: path.to_path_buf(),
    message: message.into(),
  }
}

/// Decoded structured form, with the default description applied.
struct ScriptSpec<'a> {
  description: String,
  commands: &'a Value,
}

impl<'a> ScriptSpec<'a> {
  fn from_value(path: &Path, name: &str, value: &'a Value) -> Result<Self, ScriptError> {
    let default_description = || format!("Run {name} script");

    let Value::Table(table) = value else {
      return Ok(Self {
        description: default_description(),
        commands: value,
      });
    };

    let invalid_keys: Vec<&str> = table
      .keys()
      .map(String::as_str)
      .filter(|key| !SCRIPT_KEYS.contains(key))
      .collect();
    if !invalid_keys.is_empty() {
      return Err(invalid(
        path,
        format!("script '{name}' may not contain keys '{}'", invalid_keys.join("', '")),
      ));
    }

    let commands = table
      .get("script")
      .ok_or_else(|| invalid(path, format!("script '{name}' must contain a 'script' key")))?;

    Ok(Self {
      description: table
        .get("description")
        .map(scalar_to_string)
        .unwrap_or_else(default_description),
      commands,
    })
  }
}

fn is_name_char(c: char) -> bool {
  c.is_ascii_lowercase() || c == '-'
}

/// Check a script name: non-empty, `[a-z-]` only, no leading `-`.
pub fn validate_script_name(path: &Path, name: &str) -> Result<(), ScriptError> {
  if name.is_empty() {
    return Err(invalid(path, "script name may not be empty"));
  }
  if name.starts_with('-') {
    return Err(invalid(path, format!("script name '{name}' may not start with '-'")));
  }

  let invalid_chars: String = name.chars().filter(|c| !is_name_char(*c)).collect();
  if !invalid_chars.is_empty() {
    return Err(invalid(
      path,
      format!("script name '{name}' may not contain characters '{invalid_chars}'"),
    ));
  }

  Ok(())
}

fn project_name(path: &Path, raw: &RawManifest) -> Result<String, ScriptError> {
  raw
    .get("project")
    .and_then(Value::as_table)
    .and_then(|project| project.get("name"))
    .and_then(Value::as_str)
    .map(str::to_owned)
    .ok_or_else(|| ScriptError::Structure {
      path: path.to_path_buf(),
      key: "project.name",
    })
}

fn scripts_section(raw: &RawManifest) -> Option<&toml::Table> {
  raw
    .get("tool")
    .and_then(Value::as_table)
    .and_then(|tool| tool.get(TOOL_NAMESPACE))
    .and_then(Value::as_table)
    .and_then(|namespace| namespace.get("scripts"))
    .and_then(Value::as_table)
}

/// Parse the scripts of the manifest decoded from `manifest_path`.
///
/// Returns the project name and the validated scripts in manifest order.
/// Validation stops at the first invalid script; no partial table is
/// returned.
///
/// # Errors
///
/// - [`ScriptError::Structure`] if `project.name` is missing
/// - [`ScriptError::InvalidScript`] if the scripts section is missing or
///   empty, or any script is malformed
pub fn parse_scripts(manifest_path: &Path, raw: &RawManifest) -> Result<(String, ScriptTable), ScriptError> {
  let project_name = project_name(manifest_path, raw)?;

  let section = scripts_section(raw)
    .filter(|section| !section.is_empty())
    .ok_or_else(|| {
      invalid(
        manifest_path,
        format!("does not contain a non-empty '{SCRIPTS_SECTION}' section"),
      )
    })?;

  let mut scripts = ScriptTable::default();
  for (name, value) in section {
    validate_script_name(manifest_path, name)?;

    let spec = ScriptSpec::from_value(manifest_path, name, value)?;
    let commands = parse_commands(manifest_path, name, spec.commands)?;

    debug!(script = %name, commands = commands.len(), "parsed script");
    scripts.insert(
      name.clone(),
      Script {
        description: spec.description,
        commands,
      },
    );
  }

  Ok((project_name, scripts))
}
