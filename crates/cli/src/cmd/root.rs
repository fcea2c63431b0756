//! Implementation of the `linktrees root` command.

use anyhow::{Context as _, Result};
use linktrees_lib::root::find_buck_root;
use linktrees_lib::targets::presumed_target_root;

use crate::output::print_mapping;

/// Print the build root, then the directory each pattern presumably refers to.
pub fn cmd_root(targets: &[String]) -> Result<()> {
  let cwd = std::env::current_dir().context("Failed to read current directory")?;
  let root = find_buck_root(&cwd)?;
  println!("{}", root.display());

  for target in targets {
    let presumed = root.join(presumed_target_root(target));
    print_mapping(target, &presumed.display().to_string());
  }
  Ok(())
}
