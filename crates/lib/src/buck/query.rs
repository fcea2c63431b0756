//! Target normalization through `buck targets --show-output`.

use tracing::{Instrument, error, info, warn};

use crate::buck::command::{BuckCommand, Completion, tail_lines};
use crate::consts::DIAGNOSTIC_TAIL_LINES;
use crate::context::Context;
use crate::error::{BuckError, Result};
use crate::util::{plural, quote_list};

/// Expand `patterns` into the canonical binary and test targets they name.
///
/// Each output line of `buck targets --show-output` has the form
/// `//target //corresponding.par`; only the first token is kept. An empty
/// result is logged as a warning and returned as-is.
pub async fn normalize(ctx: &Context, patterns: &[String]) -> Result<Vec<String>> {
  normalize_inner(ctx, patterns).instrument(ctx.span.clone()).await
}

async fn normalize_inner(ctx: &Context, patterns: &[String]) -> Result<Vec<String>> {
  info!(
    "Normalizing {} {}",
    plural(patterns.len(), "target"),
    quote_list(patterns)
  );

  let command = targets_command(ctx, patterns);
  let output = match command.output_within(ctx.query_timeout).await? {
    Completion::Finished(output) => output,
    Completion::TimedOut { stderr } => {
      error!(timeout = ?ctx.query_timeout, "Buck output so far: {}", tail_lines(&stderr, DIAGNOSTIC_TAIL_LINES));
      return Err(BuckError::QueryHanging {
        command: command.command_line(1),
      });
    }
  };

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let diagnostic = tail_lines(stderr.trim(), DIAGNOSTIC_TAIL_LINES);
    error!("Buck returned error: {}", diagnostic);
    return Err(BuckError::NormalizeFailed { diagnostic });
  }

  let targets = parse_targets(&String::from_utf8_lossy(&output.stdout));
  if targets.is_empty() {
    warn!("Provided targets do not contain any binary or unittest targets.");
  } else {
    info!("Found {} buck {}.", targets.len(), plural(targets.len(), "target"));
  }
  Ok(targets)
}

fn targets_command(ctx: &Context, patterns: &[String]) -> BuckCommand {
  BuckCommand::new(&ctx.buck, &ctx.build_root)
    .args(["targets", "--show-output"])
    .args(patterns.iter().cloned())
    .arg("--type")
    .args(ctx.target_types.iter().cloned())
}

/// First whitespace-separated token of every non-blank line.
pub fn parse_targets(stdout: &str) -> Vec<String> {
  stdout
    .lines()
    .filter_map(|line| line.split_whitespace().next())
    .map(str::to_string)
    .collect()
}
