//! Names and on-disk conventions of the external build tool.
//!
//! These strings are the only protocol spoken with `buck`: the marker that
//! anchors the build root, the arguments of the two invocations, and the
//! layout of the link trees it materializes under `buck-out`.

use std::time::Duration;

pub const APP_NAME: &str = "linktrees";

/// File whose presence marks the build root.
pub const BUCKCONFIG: &str = ".buckconfig";

/// Default executable for the external build tool.
pub const DEFAULT_BUCK: &str = "buck";

/// Generated outputs live under `<build-root>/buck-out/gen`.
pub const BUCK_OUT_GEN: &str = "buck-out/gen";

/// Appended to a target's path form to glob for its link trees.
pub const LINK_TREE_GLOB_SUFFIX: &str = "#*link-tree";

/// Link tree variants that never hold production sources.
pub const EXCLUDED_LINK_TREE_SUFFIXES: [&str; 3] = [
  "-vs_debugger#link-tree",
  "-interp#link-tree",
  "-ipython#link-tree",
];

/// Target types passed to `buck targets --type`.
pub const DEFAULT_TARGET_TYPES: [&str; 2] = ["python_binary", "python_test"];

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(600);

/// Number of trailing stderr lines kept from a failed build.
pub const DIAGNOSTIC_TAIL_LINES: usize = 20;

/// Resolution record location, relative to the build root.
pub const CACHE_PATH: &str = ".pyre/buckcache.json";

/// Suffix that turns a package pattern into a recursive wildcard.
pub const WILDCARD_SUFFIX: &str = "/...";

pub const ENV_BUCK: &str = "LINKTREES_BUCK";
pub const ENV_QUERY_TIMEOUT: &str = "LINKTREES_QUERY_TIMEOUT";
pub const ENV_CACHE_PATH: &str = "LINKTREES_CACHE_PATH";
