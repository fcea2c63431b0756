//! Test utilities for linktrees-lib.
//!
//! Tests never call a real `buck`. Instead they write a small `/bin/sh`
//! script into the temporary build root that answers `targets` and `build`
//! the way the scenario needs, and records every invocation.

use std::path::{Path, PathBuf};

use crate::consts::BUCKCONFIG;

pub const INVOCATION_LOG: &str = "buck-invocations.log";

/// Write an executable shell script and return its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let path = dir.join(name);
  std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  path
}

/// A temporary directory with a `.buckconfig`.
pub fn build_root() -> tempfile::TempDir {
  let temp = tempfile::TempDir::new().unwrap();
  std::fs::write(temp.path().join(BUCKCONFIG), "[project]\n").unwrap();
  temp
}

/// Create `buck-out/gen/<relative>` under `root`.
pub fn make_link_tree(root: &Path, relative: &str) -> PathBuf {
  let path = root.join("buck-out").join("gen").join(relative);
  std::fs::create_dir_all(&path).unwrap();
  path
}

/// Scripted stand-in for the `buck` executable.
#[derive(Debug, Default, Clone)]
pub struct FakeBuck {
  /// Printed by `buck targets`.
  pub targets_stdout: String,
  pub targets_stderr: String,
  pub targets_exit: i32,
  /// Seconds `buck targets` sleeps between writing stderr and stdout.
  pub targets_sleep: Option<u32>,
  pub build_stderr: String,
  pub build_exit: i32,
  /// Link trees (relative to `buck-out/gen`) created by a successful `buck build`.
  pub build_creates: Vec<String>,
}

impl FakeBuck {
  pub fn answering(targets_stdout: &str) -> Self {
    Self {
      targets_stdout: targets_stdout.to_string(),
      ..Self::default()
    }
  }

  /// Write the script into `root` and return its path.
  #[cfg(unix)]
  pub fn install(&self, root: &Path) -> PathBuf {
    let log = root.join(INVOCATION_LOG);
    let sleep = self
      .targets_sleep
      .map(|secs| format!("sleep {}\n", secs))
      .unwrap_or_default();
    let mkdirs: String = self
      .build_creates
      .iter()
      .map(|dir| format!("mkdir -p 'buck-out/gen/{}'\n", dir))
      .collect();

    let body = format!(
      r#"echo "$@" >> '{log}'
case "$1" in
  targets)
cat >&2 <<'LINKTREES_ERR'
{targets_stderr}
LINKTREES_ERR
{sleep}cat <<'LINKTREES_OUT'
{targets_stdout}
LINKTREES_OUT
exit {targets_exit}
    ;;
  build)
cat >&2 <<'LINKTREES_ERR'
{build_stderr}
LINKTREES_ERR
if [ {build_exit} -ne 0 ]; then exit {build_exit}; fi
{mkdirs}exit 0
    ;;
esac
exit 64"#,
      log = log.display(),
      sleep = sleep,
      targets_stdout = self.targets_stdout,
      targets_stderr = self.targets_stderr,
      targets_exit = self.targets_exit,
      build_stderr = self.build_stderr,
      build_exit = self.build_exit,
      mkdirs = mkdirs,
    );
    write_script(root, "fake-buck", &body)
  }
}

/// Every recorded invocation, one argument string per line.
pub fn invocations(root: &Path) -> Vec<String> {
  std::fs::read_to_string(root.join(INVOCATION_LOG))
    .map(|log| log.lines().map(str::to_string).collect())
    .unwrap_or_default()
}

/// Invocations whose first argument is `subcommand`.
pub fn invocations_of(root: &Path, subcommand: &str) -> Vec<String> {
  invocations(root)
    .into_iter()
    .filter(|line| line.split(' ').next() == Some(subcommand))
    .collect()
}
