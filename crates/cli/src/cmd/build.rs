//! Implementation of the `linktrees build` command.

use anyhow::Result;
use linktrees_lib::buck::{build_targets, normalize};

use super::{Globals, load_context, runtime};
use crate::output::{print_success, print_warning};

/// Normalize the patterns and build every binary and test target they name.
pub fn cmd_build(globals: &Globals, targets: &[String]) -> Result<()> {
  let ctx = load_context(globals)?;
  let rt = runtime()?;

  let canonical = rt.block_on(normalize(&ctx, targets))?;
  if canonical.is_empty() {
    print_warning("Nothing to build.");
    return Ok(());
  }

  rt.block_on(build_targets(&ctx, &canonical, targets))?;
  print_success(&format!("Built {} target(s)", canonical.len()));
  Ok(())
}
