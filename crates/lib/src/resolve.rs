//! Resolving target patterns to link tree directories.
//!
//! The sequence is: normalize, optionally build, locate. If some targets have
//! no link tree, build once more (after confirmation, unless prompting is off
//! and no build was requested) and locate again. Whatever is still missing
//! after that is attributed to the user's patterns and reported.

use std::path::PathBuf;

use tracing::{Instrument, debug, info, warn};

use crate::buck::{build_targets, normalize};
use crate::consts::APP_NAME;
use crate::context::Context;
use crate::error::{BuckError, Result};
use crate::locate::find_link_trees;
use crate::record::ResolutionRecord;
use crate::targets::attribute_unresolved;

/// Yes/no confirmation asked before rebuilding for missing link trees.
pub trait Prompt {
  fn confirm(&self, message: &str) -> Result<bool>;
}

impl<F> Prompt for F
where
  F: Fn(&str) -> Result<bool>,
{
  fn confirm(&self, message: &str) -> Result<bool> {
    self(message)
  }
}

#[derive(Debug, Clone)]
pub struct ResolveOptions {
  /// Build all targets before looking for link trees.
  pub build: bool,
  /// Whether the prompt may be asked.
  pub prompt: bool,
  /// Program name shown in the final "see --help" hint.
  pub program: String,
  /// Write a [`ResolutionRecord`] to the context's cache path on success.
  pub record: bool,
}

impl Default for ResolveOptions {
  fn default() -> Self {
    Self {
      build: false,
      prompt: true,
      program: APP_NAME.to_string(),
      record: true,
    }
  }
}

pub const REBUILD_QUESTION: &str = "Build target?";

/// Resolve `patterns` to the link trees of the binary and test targets they name.
pub async fn resolve(
  ctx: &Context,
  patterns: &[String],
  options: &ResolveOptions,
  prompt: &dyn Prompt,
) -> Result<Vec<PathBuf>> {
  resolve_inner(ctx, patterns, options, prompt)
    .instrument(ctx.span.clone())
    .await
}

async fn resolve_inner(
  ctx: &Context,
  patterns: &[String],
  options: &ResolveOptions,
  prompt: &dyn Prompt,
) -> Result<Vec<PathBuf>> {
  let targets = normalize(ctx, patterns).await?;
  if targets.is_empty() {
    info!("nothing to build");
  } else if options.build {
    build_targets(ctx, &targets, patterns).await?;
  }

  let mut link_trees = find_link_trees(ctx, &targets)?;

  if !link_trees.is_complete() {
    debug!(missing = ?link_trees.not_found, "link trees missing");
    let forced = !options.build && !options.prompt;
    if forced || prompt.confirm(REBUILD_QUESTION)? {
      // Rebuild everything so buck does not drop link trees built earlier.
      build_targets(ctx, &targets, patterns).await?;
      link_trees = find_link_trees(ctx, &targets)?;
    }
  }

  if !link_trees.is_complete() {
    return Err(BuckError::LinkTreesNotFound {
      targets: attribute_unresolved(&link_trees.not_found, patterns),
      program: options.program.clone(),
    });
  }

  if options.record {
    let record = ResolutionRecord {
      targets: patterns.to_vec(),
      canonical_targets: targets,
      directories: link_trees.directories.clone(),
    };
    if let Err(err) = record.write(&ctx.cache_path) {
      warn!(error = %err, path = %ctx.cache_path.display(), "could not write resolution record");
    }
  }

  Ok(link_trees.directories)
}
