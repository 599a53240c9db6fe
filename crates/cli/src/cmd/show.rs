//! Implementation of the `ppqs show` command.

use anyhow::{Result, bail};
use owo_colors::{OwoColorize, Stream};

use crate::cmd::ManifestSource;
use crate::output::{OutputFormat, format_command_line, print_json, symbols};

pub fn cmd_show(source: &ManifestSource, name: &str, format: OutputFormat) -> Result<()> {
  let loaded = source.load()?;

  let Some(script) = loaded.scripts.get(name) else {
    let available: Vec<_> = loaded.scripts.names().collect();
    bail!(
      "script '{}' not found in {}; available scripts: {}",
      name,
      loaded.manifest_path.display(),
      available.join(", ")
    );
  };

  if format.is_json() {
    return print_json(&serde_json::json!({
      "name": name,
      "description": script.description,
      "commands": script.commands,
    }));
  }

  println!(
    "{}: {}",
    name.if_supports_color(Stream::Stdout, |s| s.bold()),
    script.description
  );
  for line in &script.commands {
    println!(
      "  {} {}",
      symbols::PROMPT.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      format_command_line(line)
    );
  }

  Ok(())
}
