use anyhow::Result;

use ppqs_lib::consts::{MANIFEST_FILENAME, SCRIPTS_SECTION};

use crate::output::{OutputFormat, print_json, print_stat};

pub fn cmd_info(format: OutputFormat) -> Result<()> {
  if format.is_json() {
    return print_json(&serde_json::json!({
      "version": env!("CARGO_PKG_VERSION"),
      "manifest": MANIFEST_FILENAME,
      "section": SCRIPTS_SECTION,
    }));
  }

  println!("ppqs {}", env!("CARGO_PKG_VERSION"));
  print_stat("Manifest", MANIFEST_FILENAME);
  print_stat("Section", SCRIPTS_SECTION);
  Ok(())
}
