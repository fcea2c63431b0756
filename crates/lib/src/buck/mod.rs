//! Invocations of the external `buck` executable.
//!
//! Only two subcommands are used: `buck targets --show-output` to normalize
//! patterns and `buck build` to materialize link trees.

pub mod build;
pub mod command;
pub mod query;

pub use build::build_targets;
pub use query::normalize;
