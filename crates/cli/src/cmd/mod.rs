mod check;
mod info;
mod list;
mod show;

pub use check::cmd_check;
pub use info::cmd_info;
pub use list::cmd_list;
pub use show::cmd_show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use ppqs_lib::LoadedScripts;
use ppqs_lib::locate::find_manifest;
use tracing::debug;

/// Where the manifest comes from, as chosen on the command line.
///
/// An explicit manifest wins over a search directory; with neither, the
/// search starts in the current directory.
#[derive(Debug, Default)]
pub struct ManifestSource {
  pub manifest: Option<PathBuf>,
  pub directory: Option<PathBuf>,
}

impl ManifestSource {
  pub fn load(&self) -> Result<LoadedScripts> {
    debug!(manifest = ?self.manifest, directory = ?self.directory, "resolving manifest source");

    let loaded = match (&self.manifest, &self.directory) {
      (Some(manifest), _) => ppqs_lib::load_scripts_at(manifest),
      (None, Some(directory)) => ppqs_lib::load_scripts(directory),
      (None, None) => {
        let manifest = find_manifest().context("Failed to locate manifest")?;
        ppqs_lib::load_scripts_at(&manifest)
      }
    };
    loaded.context("Failed to load scripts")
  }
}
