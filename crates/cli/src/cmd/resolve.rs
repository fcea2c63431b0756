//! Implementation of the `linktrees resolve` command.

use anyhow::Result;
use linktrees_lib::{ResolveOptions, resolve};
use tracing::debug;

use super::{Globals, load_context, runtime};
use crate::output::{OutputFormat, print_json};
use crate::prompts::TerminalPrompt;

/// Resolve patterns to link tree directories and print one per line.
///
/// Without `build`, missing link trees are built after confirmation, or
/// straight away when prompting is disabled.
pub fn cmd_resolve(
  globals: &Globals,
  targets: &[String],
  build: bool,
  prompt: bool,
  output: OutputFormat,
) -> Result<()> {
  let ctx = load_context(globals)?;
  let options = ResolveOptions {
    build,
    prompt,
    program: std::env::args().next().unwrap_or_else(|| "linktrees".to_string()),
    ..ResolveOptions::default()
  };
  debug!(?options, "resolving");

  let directories = runtime()?.block_on(resolve(&ctx, targets, &options, &TerminalPrompt))?;

  if output.is_json() {
    print_json(&directories)?;
  } else {
    for dir in &directories {
      println!("{}", dir.display());
    }
  }
  Ok(())
}
