//! Record of the last successful resolution.
//!
//! The record is written for inspection only. Resolution never reads it, so
//! every call still queries `buck` and scans the filesystem afresh.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BuckError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRecord {
  /// Patterns as the user supplied them.
  pub targets: Vec<String>,
  pub canonical_targets: Vec<String>,
  pub directories: Vec<PathBuf>,
}

impl ResolutionRecord {
  pub fn write(&self, path: &Path) -> Result<()> {
    let io_error = |source| BuckError::Record {
      path: path.to_path_buf(),
      source,
    };

    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(io_error)?;
    }
    let json = serde_json::to_string_pretty(self).map_err(|e| io_error(std::io::Error::other(e)))?;
    fs::write(path, json).map_err(io_error)
  }

  /// Load a record, `Ok(None)` when none has been written yet.
  pub fn read(path: &Path) -> Result<Option<Self>> {
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
      Err(source) => {
        return Err(BuckError::Record {
          path: path.to_path_buf(),
          source,
        });
      }
    };
    serde_json::from_str(&contents)
      .map(Some)
      .map_err(|e| BuckError::Record {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
      })
  }
}
