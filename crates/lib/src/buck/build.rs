//! Building canonical targets with `buck build`.

use tracing::{Instrument, error, info, warn};

use crate::buck::command::{BuckCommand, tail_lines};
use crate::consts::DIAGNOSTIC_TAIL_LINES;
use crate::context::Context;
use crate::error::{BuckError, Result};
use crate::util::{plural, quote_list};

/// Build `targets`. `original` only shapes the log line.
///
/// No timeout applies: a stuck build blocks until it exits. On failure only
/// the last [`DIAGNOSTIC_TAIL_LINES`] lines of stderr are kept.
pub async fn build_targets(ctx: &Context, targets: &[String], original: &[String]) -> Result<()> {
  build_inner(ctx, targets, original).instrument(ctx.span.clone()).await
}

async fn build_inner(ctx: &Context, targets: &[String], original: &[String]) -> Result<()> {
  info!(
    "Building {} {}",
    plural(original.len(), "target"),
    quote_list(original)
  );

  let output = BuckCommand::new(&ctx.buck, &ctx.build_root)
    .arg("build")
    .args(targets.iter().cloned())
    .output()
    .await?;

  if !output.status.success() {
    let diagnostic = tail_lines(&String::from_utf8_lossy(&output.stderr), DIAGNOSTIC_TAIL_LINES);
    error!("Buck returned error: {}", diagnostic);
    return Err(BuckError::BuildFailed { diagnostic });
  }

  warn!("Finished building targets.");
  Ok(())
}
