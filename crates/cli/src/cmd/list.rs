//! Implementation of the `ppqs list` command.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::cmd::ManifestSource;
use crate::output::{OutputFormat, print_info, print_json};

pub fn cmd_list(source: &ManifestSource, format: OutputFormat) -> Result<()> {
  let loaded = source.load()?;

  if format.is_json() {
    return print_json(&serde_json::json!({
      "manifest": loaded.manifest_path,
      "project": loaded.project_name,
      "scripts": loaded.scripts,
    }));
  }

  print_info(&format!(
    "Scripts for {} ({})",
    loaded.project_name,
    loaded.manifest_path.display()
  ));

  let width = loaded.scripts.names().map(str::len).max().unwrap_or(0);
  for (name, script) in &loaded.scripts {
    println!(
      "  {}  {}",
      format!("{name:<width$}").if_supports_color(Stream::Stdout, |s| s.bold()),
      script.description
    );
  }

  Ok(())
}
