mod cmd;
mod output;
mod prompts;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::Globals;
use crate::output::OutputFormat;

/// linktrees - resolve buck targets to their built link trees
#[derive(Parser)]
#[command(name = "linktrees")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// buck executable to invoke (default: $LINKTREES_BUCK or `buck`)
  #[arg(long, global = true)]
  buck: Option<PathBuf>,

  /// Give up on `buck targets` after this long (e.g. "90s", "10m")
  #[arg(long, global = true, value_parser = humantime::parse_duration)]
  query_timeout: Option<Duration>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the link tree directories for the given targets
  Resolve {
    /// Target patterns, e.g. //app:bin or //lib/...
    #[arg(required = true)]
    targets: Vec<String>,

    /// Build the targets before looking for link trees
    #[arg(short, long)]
    build: bool,

    /// Never ask before building missing link trees
    #[arg(long)]
    no_prompt: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Print the canonical binary and test targets for the given patterns
  Normalize {
    #[arg(required = true)]
    targets: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Build the binary and test targets named by the given patterns
  Build {
    #[arg(required = true)]
    targets: Vec<String>,
  },

  /// Print the build root and the directory each pattern refers to
  Root { targets: Vec<String> },

  /// Show the last successful resolution
  Last {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let globals = Globals {
    buck: cli.buck,
    query_timeout: cli.query_timeout,
  };

  let result = match cli.command {
    Commands::Resolve {
      targets,
      build,
      no_prompt,
      output,
    } => cmd::cmd_resolve(&globals, &targets, build, !no_prompt, output),
    Commands::Normalize { targets, output } => cmd::cmd_normalize(&globals, &targets, output),
    Commands::Build { targets } => cmd::cmd_build(&globals, &targets),
    Commands::Root { targets } => cmd::cmd_root(&targets),
    Commands::Last { output } => cmd::cmd_last(&globals, output),
  };

  if let Err(err) = result {
    output::print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}
