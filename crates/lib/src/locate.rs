//! Upward search for the project manifest.
//!
//! The search starts in a directory and walks towards the filesystem root,
//! returning the first readable `pyproject.toml`. It stops as soon as the
//! parent of the candidate directory is not writable by the current user, so
//! a manifest sitting in `/`, `/tmp` or next to the home directory is never
//! treated as the project's.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::consts::MANIFEST_FILENAME;

/// Errors that can occur while locating the manifest.
#[derive(Debug, Error)]
pub enum LocateError {
  /// No manifest between the start directory and the search boundary.
  #[error(
    "'{}' could not be found in '{}' or its parent directories",
    MANIFEST_FILENAME,
    start.display()
  )]
  NotFound { start: PathBuf },

  /// The current working directory could not be determined.
  #[error("failed to determine current directory: {0}")]
  CurrentDir(#[source] io::Error),
}

/// Filesystem access checks performed during the search.
pub trait AccessProbe {
  /// Whether the current user may create entries in `dir`.
  fn is_writable_dir(&self, dir: &Path) -> bool;

  /// Whether `file` exists and the current user may read it.
  fn is_readable_file(&self, file: &Path) -> bool;
}

/// Probe backed by the real filesystem and the calling user's permissions.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl AccessProbe for SystemProbe {
  fn is_writable_dir(&self, dir: &Path) -> bool {
    can_write(dir)
  }

  fn is_readable_file(&self, file: &Path) -> bool {
    can_read(file)
  }
}

#[cfg(unix)]
fn can_write(path: &Path) -> bool {
  use rustix::fs::{Access, access};

  access(path, Access::WRITE_OK).is_ok()
}

#[cfg(not(unix))]
fn can_write(path: &Path) -> bool {
  std::fs::metadata(path)
    .map(|m| !m.permissions().readonly())
    .unwrap_or(false)
}

#[cfg(unix)]
fn can_read(path: &Path) -> bool {
  use rustix::fs::{Access, access};

  access(path, Access::EXISTS | Access::READ_OK).is_ok()
}

#[cfg(not(unix))]
fn can_read(path: &Path) -> bool {
  std::fs::File::open(path).is_ok()
}

/// Manifest search parameterized over how access is checked.
#[derive(Debug, Default, Clone)]
pub struct Locator<P = SystemProbe> {
  probe: P,
}

impl<P: AccessProbe> Locator<P> {
  pub fn new(probe: P) -> Self {
    Self { probe }
  }

  /// Search `start` and its ancestors for the nearest manifest.
  ///
  /// `start` must be absolute. The filesystem root itself is never a
  /// candidate, and no directory whose parent is not writable is inspected.
  ///
  /// # Errors
  ///
  /// Returns [`LocateError::NotFound`] if the boundary or the root is reached
  /// without finding a readable manifest.
  pub fn locate(&self, start: &Path) -> Result<PathBuf, LocateError> {
    let mut current = start;

    while let Some(parent) = current.parent() {
      if !self.probe.is_writable_dir(parent) {
        debug!(dir = %parent.display(), "parent directory not writable, stopping search");
        break;
      }

      let candidate = current.join(MANIFEST_FILENAME);
      debug!(path = %candidate.display(), "checking for manifest");
      if self.probe.is_readable_file(&candidate) {
        info!(path = %candidate.display(), "found manifest");
        return Ok(candidate);
      }

      current = parent;
    }

    Err(LocateError::NotFound {
      start: start.to_path_buf(),
    })
  }
}

/// Find the nearest manifest, starting in the current working directory.
///
/// # Errors
///
/// Returns [`LocateError::CurrentDir`] if the working directory is
/// unavailable, or [`LocateError::NotFound`] if no manifest is found.
pub fn find_manifest() -> Result<PathBuf, LocateError> {
  let start = std::env::current_dir().map_err(LocateError::CurrentDir)?;
  Locator::<SystemProbe>::default().locate(&start)
}

/// Find the nearest manifest, starting in `start`.
///
/// Relative paths are resolved against the current working directory and
/// symlinks are resolved where the path exists.
pub fn find_manifest_from(start: &Path) -> Result<PathBuf, LocateError> {
  let absolute = if start.is_absolute() {
    start.to_path_buf()
  } else {
    std::env::current_dir().map_err(LocateError::CurrentDir)?.join(start)
  };
  let start = dunce::canonicalize(&absolute).unwrap_or(absolute);

  Locator::<SystemProbe>::default().locate(&start)
}
