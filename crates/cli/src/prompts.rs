use std::io::{self, IsTerminal, Write};

use linktrees_lib::{BuckError, Prompt};

/// Asks on stderr and reads the answer from stdin.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
  fn confirm(&self, message: &str) -> linktrees_lib::Result<bool> {
    confirm(message).map_err(|e| BuckError::Prompt(e.to_string()))
  }
}

pub fn confirm(message: &str) -> anyhow::Result<bool> {
  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    anyhow::bail!("Cannot prompt for confirmation in non-interactive mode. Use --no-prompt to build without asking.");
  }

  write!(io::stderr(), "{} [y/N] ", message)?;
  io::stderr().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  Ok(matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
