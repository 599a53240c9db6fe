//! ppqs-lib: discovery and validation of project quick scripts.
//!
//! This crate provides the pieces a script runner needs before it can run
//! anything:
//! - [`locate`]: find the nearest `pyproject.toml`, bounded by write access
//! - [`manifest`]: read and decode the manifest file
//! - [`scripts`]: validate `[tool.ppqs.scripts]` into a [`scripts::ScriptTable`]
//!
//! Nothing in this crate executes a script.

pub mod consts;
pub mod locate;
pub mod manifest;
pub mod scripts;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::locate::{LocateError, find_manifest_from};
use crate::manifest::{ManifestError, read_manifest};
use crate::scripts::{ScriptError, ScriptTable, parse_scripts};

/// Any failure along the locate → read → parse pipeline.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Locate(#[from] LocateError),

  #[error(transparent)]
  Manifest(#[from] ManifestError),

  #[error(transparent)]
  Script(#[from] ScriptError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Scripts loaded from a discovered or explicitly given manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedScripts {
  pub manifest_path: PathBuf,
  pub project_name: String,
  pub scripts: ScriptTable,
}

/// Locate the manifest starting at `start`, then read and parse its scripts.
pub fn load_scripts(start: &Path) -> Result<LoadedScripts> {
  let manifest_path = find_manifest_from(start)?;
  load_scripts_at(&manifest_path)
}

/// Read and parse the scripts of the manifest at `manifest_path`.
pub fn load_scripts_at(manifest_path: &Path) -> Result<LoadedScripts> {
  info!(manifest = %manifest_path.display(), "loading scripts");

  let raw = read_manifest(manifest_path)?;
  let (project_name, scripts) = parse_scripts(manifest_path, &raw)?;

  Ok(LoadedScripts {
    manifest_path: manifest_path.to_path_buf(),
    project_name,
    scripts,
  })
}
