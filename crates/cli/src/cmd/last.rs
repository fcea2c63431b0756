//! Implementation of the `linktrees last` command.

use anyhow::Result;
use linktrees_lib::record::ResolutionRecord;

use super::{Globals, load_context};
use crate::output::{OutputFormat, print_json, print_warning};

pub fn cmd_last(globals: &Globals, output: OutputFormat) -> Result<()> {
  let ctx = load_context(globals)?;

  let Some(record) = ResolutionRecord::read(&ctx.cache_path)? else {
    print_warning(&format!("No resolution recorded at {}", ctx.cache_path.display()));
    return Ok(());
  };

  if output.is_json() {
    return print_json(&record);
  }

  println!("targets: {}", record.targets.join(" "));
  for target in &record.canonical_targets {
    println!("  {}", target);
  }
  for dir in &record.directories {
    println!("{}", dir.display());
  }
  Ok(())
}
