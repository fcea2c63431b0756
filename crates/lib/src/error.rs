//! Errors raised while resolving targets to link trees.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuckError>;

#[derive(Debug, Error)]
pub enum BuckError {
  /// No `.buckconfig` in the start directory or any of its ancestors.
  #[error("No .buckconfig found in ancestors of {}.", .start.display())]
  NoBuildRoot { start: PathBuf },

  /// `buck targets` did not finish within the query timeout.
  #[error("Seems like `{command}` is hanging.\n   Try running `buck clean` before trying again.")]
  QueryHanging { command: String },

  /// `buck targets` exited non-zero.
  #[error("Could not normalize targets. Check the paths or run `buck clean`.\n{diagnostic}")]
  NormalizeFailed { diagnostic: String },

  /// `buck build` exited non-zero. The diagnostic holds the tail of stderr.
  #[error("Could not build targets. Check the paths or run `buck clean`.\n{diagnostic}")]
  BuildFailed { diagnostic: String },

  /// Some targets still have no link tree after the rebuild attempt.
  #[error(
    "Could not find link trees for:\n    `{}`.\n   See `{program} --help` for more information.",
    .targets.join("`\n    `")
  )]
  LinkTreesNotFound { targets: Vec<String>, program: String },

  /// The external tool could not be started at all.
  #[error("Failed to run `{}`: {source}", .program.display())]
  Spawn {
    program: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Invalid link tree pattern `{pattern}`: {source}")]
  Pattern {
    pattern: String,
    #[source]
    source: glob::PatternError,
  },

  /// The confirmation prompt could not be answered.
  #[error("Prompt failed: {0}")]
  Prompt(String),

  #[error("Failed to write resolution record to {}: {source}", .path.display())]
  Record {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl BuckError {
  /// True for the conditions that end a resolution, as opposed to failures
  /// of the local environment.
  pub fn is_fatal_condition(&self) -> bool {
    matches!(
      self,
      BuckError::NoBuildRoot { .. }
        | BuckError::QueryHanging { .. }
        | BuckError::NormalizeFailed { .. }
        | BuckError::BuildFailed { .. }
        | BuckError::LinkTreesNotFound { .. }
    )
  }
}
