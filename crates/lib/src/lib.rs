//! linktrees-lib: resolve buck targets to the link trees they build.
//!
//! The crate is a thin adapter over an external `buck` executable:
//! - `buck::query`: normalize user patterns into canonical targets
//! - `buck::build`: build canonical targets
//! - `locate`: find the link trees under `buck-out/gen`
//! - `targets`: attribute unresolved targets to the patterns the user typed
//! - `resolve`: sequence the above, with a single rebuild-and-retry

pub mod buck;
pub mod consts;
pub mod context;
pub mod error;
pub mod locate;
pub mod record;
pub mod resolve;
pub mod root;
pub mod targets;
pub mod util;

pub use context::Context;
pub use error::{BuckError, Result};
pub use locate::LinkTrees;
pub use resolve::{Prompt, ResolveOptions, resolve};
