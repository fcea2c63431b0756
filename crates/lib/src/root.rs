//! Build root discovery.

use std::path::{Path, PathBuf};

use crate::consts::BUCKCONFIG;
use crate::error::{BuckError, Result};

/// Walk upward from `start` and return the first directory containing `marker`.
pub fn find_root(start: &Path, marker: &str) -> Option<PathBuf> {
  start
    .ancestors()
    .find(|dir| dir.join(marker).is_file())
    .map(Path::to_path_buf)
}

/// Like [`find_root`], but a missing marker is [`BuckError::NoBuildRoot`].
pub fn require_root(start: &Path, marker: &str) -> Result<PathBuf> {
  let root = find_root(start, marker).ok_or_else(|| BuckError::NoBuildRoot {
    start: start.to_path_buf(),
  })?;
  Ok(dunce::canonicalize(&root).unwrap_or(root))
}

/// Locate the buck root above `start`, canonicalized.
pub fn find_buck_root(start: &Path) -> Result<PathBuf> {
  require_root(start, BUCKCONFIG)
}
