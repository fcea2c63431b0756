//! Subprocess plumbing shared by the query and build invocations.

use std::path::{Path, PathBuf};
use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::debug;

use crate::error::{BuckError, Result};

/// How a time-limited invocation ended.
#[derive(Debug)]
pub enum Completion {
  Finished(Output),
  /// The deadline passed first. `stderr` holds what was written up to then.
  TimedOut { stderr: String },
}

/// A `buck` invocation: program, arguments and working directory.
#[derive(Debug, Clone)]
pub struct BuckCommand {
  program: PathBuf,
  args: Vec<String>,
  cwd: PathBuf,
}

impl BuckCommand {
  pub fn new(program: &Path, cwd: &Path) -> Self {
    Self {
      program: program.to_path_buf(),
      args: Vec::new(),
      cwd: cwd.to_path_buf(),
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  /// The command line as it would be typed, without its last `skip_last` arguments.
  pub fn command_line(&self, skip_last: usize) -> String {
    let keep = self.args.len().saturating_sub(skip_last);
    std::iter::once(self.program.display().to_string())
      .chain(self.args[..keep].iter().cloned())
      .collect::<Vec<_>>()
      .join(" ")
  }

  /// Run to completion and capture stdout and stderr.
  pub async fn output(&self) -> Result<Output> {
    self.command().output().await.map_err(|source| self.spawn_error(source))
  }

  /// Like [`BuckCommand::output`], but gives up once `limit` passes.
  ///
  /// The child is not killed when the deadline passes and may keep running.
  pub async fn output_within(&self, limit: Duration) -> Result<Completion> {
    let mut child = self.command().spawn().map_err(|source| self.spawn_error(source))?;
    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let run = async {
      let (status, out, err) = tokio::join!(
        child.wait(),
        read_pipe(stdout_pipe, &mut stdout),
        read_pipe(stderr_pipe, &mut stderr)
      );
      out.and(err).and(status)
    };
    let finished = tokio::time::timeout(limit, run).await;

    match finished {
      Ok(status) => Ok(Completion::Finished(Output {
        status: status.map_err(|source| self.spawn_error(source))?,
        stdout,
        stderr,
      })),
      Err(_) => Ok(Completion::TimedOut {
        stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
      }),
    }
  }

  fn command(&self) -> Command {
    debug!(command = %self.command_line(0), cwd = %self.cwd.display(), "spawning buck");

    let mut command = Command::new(&self.program);
    command
      .args(&self.args)
      .current_dir(&self.cwd)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped());
    command
  }

  fn spawn_error(&self, source: std::io::Error) -> BuckError {
    BuckError::Spawn {
      program: self.program.clone(),
      source,
    }
  }
}

/// Drain a pipe into `buf`. Bytes read before cancellation stay in `buf`.
async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>, buf: &mut Vec<u8>) -> io::Result<()> {
  if let Some(mut pipe) = pipe {
    pipe.read_to_end(buf).await?;
  }
  Ok(())
}

/// Keep only the last `count` lines of `text`.
pub fn tail_lines(text: &str, count: usize) -> String {
  let lines: Vec<&str> = text.lines().collect();
  let start = lines.len().saturating_sub(count);
  lines[start..].join("\n")
}
