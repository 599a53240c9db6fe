//! Normalizing a script's commands value into command lines.

use std::path::{Component, Path, PathBuf};

use toml::Value;

use super::types::CommandLine;
use super::{ScriptError, invalid};

/// Line terminators: ASCII line and record separators plus NEL, LS and PS.
fn is_line_boundary(c: char) -> bool {
  matches!(
    c,
    '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
  )
}

/// Split a shorthand string script into command lines.
///
/// Blank lines are dropped and each remaining line is split on whitespace.
pub fn parse_command_text(text: &str) -> Vec<CommandLine> {
  text
    .split(is_line_boundary)
    .filter(|line| !line.trim().is_empty())
    .map(|line| line.split_whitespace().map(str::to_owned).collect())
    .collect()
}

/// Parse the commands value of script `name`: a string or a list of lists.
pub(super) fn parse_commands(path: &Path, name: &str, value: &Value) -> Result<Vec<CommandLine>, ScriptError> {
  match value {
    Value::String(text) => Ok(parse_command_text(text)),
    Value::Array(lines) => lines
      .iter()
      .map(|line| match line {
        Value::Array(args) => parse_command_line(path, name, args),
        _ => Err(shape_error(path, name)),
      })
      .collect(),
    _ => Err(shape_error(path, name)),
  }
}

fn shape_error(path: &Path, name: &str) -> ScriptError {
  invalid(path, format!("script '{name}' may be either a string or a list of lists"))
}

fn parse_command_line(path: &Path, name: &str, args: &[Value]) -> Result<CommandLine, ScriptError> {
  args
    .iter()
    .map(|arg| match arg {
      Value::Array(segments) => join_path_argument(path, name, segments),
      Value::Table(_) => Err(invalid(
        path,
        format!("argument in script '{name}' may be either a string or a list of path components"),
      )),
      scalar => Ok(scalar_to_string(scalar)),
    })
    .collect()
}

/// Join path segments into a relative path argument.
fn join_path_argument(path: &Path, name: &str, segments: &[Value]) -> Result<String, ScriptError> {
  let mut joined = PathBuf::new();
  for segment in segments {
    let Value::String(segment) = segment else {
      return Err(invalid(
        path,
        format!("path argument in script '{name}' must be a list of strings"),
      ));
    };
    joined.push(segment);
  }

  let normalized: PathBuf = joined
    .components()
    .filter(|c| !matches!(c, Component::CurDir))
    .collect();

  if normalized.is_absolute() {
    return Err(invalid(
      path,
      format!("path argument '{}' must be a relative path", normalized.display()),
    ));
  }

  if normalized.as_os_str().is_empty() {
    return Ok(".".to_string());
  }
  Ok(normalized.to_string_lossy().into_owned())
}

/// String form of a value used as a literal token or description.
pub(super) fn scalar_to_string(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
