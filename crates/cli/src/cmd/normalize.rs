//! Implementation of the `linktrees normalize` command.

use anyhow::Result;
use linktrees_lib::buck::normalize;

use super::{Globals, load_context, runtime};
use crate::output::{OutputFormat, print_json};

pub fn cmd_normalize(globals: &Globals, targets: &[String], output: OutputFormat) -> Result<()> {
  let ctx = load_context(globals)?;
  let canonical = runtime()?.block_on(normalize(&ctx, targets))?;

  if output.is_json() {
    print_json(&canonical)?;
  } else {
    for target in &canonical {
      println!("{}", target);
    }
  }
  Ok(())
}
