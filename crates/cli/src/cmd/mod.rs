mod build;
mod last;
mod normalize;
mod resolve;
mod root;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use linktrees_lib::Context;

pub use build::cmd_build;
pub use last::cmd_last;
pub use normalize::cmd_normalize;
pub use resolve::cmd_resolve;
pub use root::cmd_root;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct Globals {
  pub buck: Option<PathBuf>,
  pub query_timeout: Option<Duration>,
}

/// Discover the build root from the current directory and apply the global flags.
fn load_context(globals: &Globals) -> Result<Context> {
  let cwd = std::env::current_dir().context("Failed to read current directory")?;
  let mut ctx = Context::discover(&cwd)?;
  if let Some(buck) = &globals.buck {
    ctx.buck = buck.clone();
  }
  if let Some(timeout) = globals.query_timeout {
    ctx.query_timeout = timeout;
  }
  Ok(ctx)
}

fn runtime() -> Result<tokio::runtime::Runtime> {
  tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")
}
