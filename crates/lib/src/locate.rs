//! Finding the link trees `buck` materialized under `buck-out/gen`.

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};

use crate::consts::{BUCK_OUT_GEN, EXCLUDED_LINK_TREE_SUFFIXES, LINK_TREE_GLOB_SUFFIX};
use crate::context::Context;
use crate::error::{BuckError, Result};

/// Directories found for a set of canonical targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTrees {
  pub directories: Vec<PathBuf>,
  /// Canonical targets without any usable link tree.
  pub not_found: Vec<String>,
}

impl LinkTrees {
  pub fn is_complete(&self) -> bool {
    self.not_found.is_empty()
  }
}

/// `//app/sub:bin` becomes `app/sub/bin`; a cell name before `//` is dropped.
pub fn target_path(target: &str) -> String {
  let relative = match target.find("//") {
    Some(index) => &target[index + 2..],
    None => target,
  };
  relative.replace(':', "/")
}

/// True for the debugger, interpreter and notebook variants.
pub fn is_excluded(tree: &Path) -> bool {
  let name = tree.to_string_lossy();
  EXCLUDED_LINK_TREE_SUFFIXES
    .iter()
    .any(|suffix| name.ends_with(suffix))
}

/// Glob for `<root>/buck-out/gen/<target-path>#*link-tree` for every target.
///
/// Targets are visited in sorted order and duplicates are looked up once.
/// A target counts as not found when none of its matches survive the
/// variant exclusion.
pub fn find_link_trees(ctx: &Context, targets: &[String]) -> Result<LinkTrees> {
  let _enter = ctx.span.enter();

  let mut sorted = targets.to_vec();
  sorted.sort();
  sorted.dedup();

  let mut found = LinkTrees::default();
  for target in sorted {
    let trees = link_trees_for(&ctx.build_root, &target)?;
    if trees.is_empty() {
      debug!(target = %target, "no link tree");
      found.not_found.push(target);
    } else {
      debug!(target = %target, count = trees.len(), "found link trees");
      found.directories.extend(trees);
    }
  }
  Ok(found)
}

fn link_trees_for(build_root: &Path, target: &str) -> Result<Vec<PathBuf>> {
  let pattern = format!(
    "{}/{}/{}{}",
    Pattern::escape(&build_root.to_string_lossy()),
    BUCK_OUT_GEN,
    Pattern::escape(&target_path(target)),
    LINK_TREE_GLOB_SUFFIX
  );

  let entries = glob::glob(&pattern).map_err(|source| BuckError::Pattern {
    pattern: pattern.clone(),
    source,
  })?;

  let mut trees = Vec::new();
  for entry in entries {
    match entry {
      Ok(path) if path.is_dir() && !is_excluded(&path) => trees.push(path),
      Ok(_) => {}
      Err(err) => warn!(error = %err, "skipping unreadable link tree"),
    }
  }
  trees.sort();
  Ok(trees)
}
