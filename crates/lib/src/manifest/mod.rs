//! Reading the project manifest.
//!
//! The manifest is decoded into a generic [`RawManifest`] table; the scripts
//! schema is applied afterwards by [`crate::scripts::parse_scripts`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// A decoded manifest: nested tables, arrays and scalars in file order.
pub type RawManifest = toml::Table;

/// Errors that can occur while reading the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse manifest {}: {source}", path.display())]
  Decode { path: PathBuf, source: toml::de::Error },
}

/// Read and decode the manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<RawManifest, ManifestError> {
  let content = fs::read_to_string(path).map_err(|e| ManifestError::Read {
    path: path.to_path_buf(),
    source: e,
  })?;

  debug!(path = %path.display(), bytes = content.len(), "decoding manifest");

  parse_manifest(&content).map_err(|e| ManifestError::Decode {
    path: path.to_path_buf(),
    source: e,
  })
}

/// Decode manifest text.
pub fn parse_manifest(content: &str) -> Result<RawManifest, toml::de::Error> {
  toml::from_str(content)
}
