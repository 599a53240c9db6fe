//! Implementation of the `ppqs check` command.
//!
//! Loads and validates the scripts section, reporting only the outcome.

use anyhow::Result;

use crate::cmd::ManifestSource;
use crate::output::{OutputFormat, print_json, print_stat, print_success};

pub fn cmd_check(source: &ManifestSource, format: OutputFormat) -> Result<()> {
  let loaded = source.load()?;
  let commands: usize = loaded.scripts.iter().map(|(_, s)| s.commands.len()).sum();

  if format.is_json() {
    return print_json(&serde_json::json!({
      "manifest": loaded.manifest_path,
      "project": loaded.project_name,
      "scripts": loaded.scripts.len(),
      "commands": commands,
      "valid": true,
    }));
  }

  print_success(&format!("{} script(s) valid", loaded.scripts.len()));
  print_stat("Manifest", &loaded.manifest_path.display().to_string());
  print_stat("Project", &loaded.project_name);
  print_stat("Commands", &commands.to_string());

  Ok(())
}
