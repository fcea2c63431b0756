//! Configuration passed explicitly to every operation.
//!
//! Values come from defaults, then environment variables, then whatever the
//! caller sets on the returned struct (the CLI applies its flags this way).

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{Span, info_span, warn};

use crate::consts::{
  CACHE_PATH, DEFAULT_BUCK, DEFAULT_QUERY_TIMEOUT, DEFAULT_TARGET_TYPES, ENV_BUCK, ENV_CACHE_PATH,
  ENV_QUERY_TIMEOUT,
};
use crate::error::Result;
use crate::root::find_buck_root;

#[derive(Debug, Clone)]
pub struct Context {
  /// Directory holding `.buckconfig`.
  pub build_root: PathBuf,
  /// Executable invoked for `targets` and `build`.
  pub buck: PathBuf,
  pub query_timeout: Duration,
  pub target_types: Vec<String>,
  /// Where the last successful resolution is recorded.
  pub cache_path: PathBuf,
  /// Every operation logs inside this span.
  pub span: Span,
}

impl Context {
  /// Discover the build root above `start` and read overrides from the environment.
  pub fn discover(start: &Path) -> Result<Self> {
    let build_root = find_buck_root(start)?;
    Ok(Self::with_root(build_root))
  }

  /// Build a context for a known build root.
  pub fn with_root(build_root: PathBuf) -> Self {
    let span = info_span!("linktrees", root = %build_root.display());
    Self {
      buck: buck_from_env(),
      query_timeout: query_timeout_from_env(),
      target_types: DEFAULT_TARGET_TYPES.iter().map(|t| t.to_string()).collect(),
      cache_path: cache_path_from_env(&build_root),
      build_root,
      span,
    }
  }
}

fn buck_from_env() -> PathBuf {
  std::env::var(ENV_BUCK)
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from(DEFAULT_BUCK))
}

fn query_timeout_from_env() -> Duration {
  match std::env::var(ENV_QUERY_TIMEOUT) {
    Ok(value) => match humantime::parse_duration(&value) {
      Ok(timeout) => timeout,
      Err(err) => {
        warn!(value = %value, error = %err, "ignoring invalid {}", ENV_QUERY_TIMEOUT);
        DEFAULT_QUERY_TIMEOUT
      }
    },
    Err(_) => DEFAULT_QUERY_TIMEOUT,
  }
}

fn cache_path_from_env(build_root: &Path) -> PathBuf {
  std::env::var(ENV_CACHE_PATH)
    .map(PathBuf::from)
    .unwrap_or_else(|_| build_root.join(CACHE_PATH))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::consts::BUCKCONFIG;
  use crate::error::BuckError;
  use crate::root::require_root;
  use serial_test::serial;
  use tempfile::TempDir;

  #[test]
  #[serial]
  fn defaults_without_environment() {
    temp_env::with_vars(
      [
        (ENV_BUCK, None::<&str>),
        (ENV_QUERY_TIMEOUT, None::<&str>),
        (ENV_CACHE_PATH, None::<&str>),
      ],
      || {
        let ctx = Context::with_root(PathBuf::from("/repo"));
        assert_eq!(ctx.buck, PathBuf::from("buck"));
        assert_eq!(ctx.query_timeout, Duration::from_secs(600));
        assert_eq!(ctx.target_types, vec!["python_binary", "python_test"]);
        assert_eq!(ctx.cache_path, PathBuf::from("/repo/.pyre/buckcache.json"));
      },
    );
  }

  #[test]
  #[serial]
  fn environment_overrides_defaults() {
    temp_env::with_vars(
      [
        (ENV_BUCK, Some("/opt/buck/bin/buck")),
        (ENV_QUERY_TIMEOUT, Some("90s")),
        (ENV_CACHE_PATH, Some("/tmp/record.json")),
      ],
      || {
        let ctx = Context::with_root(PathBuf::from("/repo"));
        assert_eq!(ctx.buck, PathBuf::from("/opt/buck/bin/buck"));
        assert_eq!(ctx.query_timeout, Duration::from_secs(90));
        assert_eq!(ctx.cache_path, PathBuf::from("/tmp/record.json"));
      },
    );
  }

  #[test]
  #[serial]
  fn invalid_timeout_falls_back_to_default() {
    temp_env::with_var(ENV_QUERY_TIMEOUT, Some("soon"), || {
      let ctx = Context::with_root(PathBuf::from("/repo"));
      assert_eq!(ctx.query_timeout, DEFAULT_QUERY_TIMEOUT);
    });
  }

  #[test]
  fn missing_marker_is_no_build_root() {
    let temp = TempDir::new().unwrap();

    let err = require_root(temp.path(), ".linktrees-absent-marker").unwrap_err();

    match err {
      BuckError::NoBuildRoot { start } => assert_eq!(start, temp.path()),
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn discover_finds_root_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(BUCKCONFIG), "").unwrap();
    let nested = temp.path().join("app").join("src");
    std::fs::create_dir_all(&nested).unwrap();

    let ctx = Context::discover(&nested).unwrap();
    assert_eq!(ctx.build_root, dunce::canonicalize(temp.path()).unwrap());
  }
}
