// Subcommand handlers. Everything except `help` validates its arguments and
// hands a Request to the Backend.

pub mod backend;
mod help_cmd;

use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::ParsedOptions;
use crate::error::CliError;
use crate::help::describe_command;
use crate::registry::{CommandDescriptor, Registry};
use backend::{Backend, Feedback, Request};

pub use help_cmd::help;

/// Entry point of a canonical command.
pub type Handler = fn(&mut Invocation<'_>) -> Result<()>;

pub struct Invocation<'a> {
  pub command: &'a CommandDescriptor,
  pub registry: &'a Registry,
  /// Positional arguments after the subcommand name.
  pub targets: &'a [String],
  pub options: &'a ParsedOptions,
  pub out: &'a mut dyn Write,
  pub err: &'a mut dyn Write,
  pub backend: &'a mut dyn Backend,
  pub feedback: Option<&'a mut dyn Feedback>,
}

impl Invocation<'_> {
  /// Print this command's usage and fail with the argument-parsing kind
  /// when the target count is out of range.
  fn require(&mut self, min: usize, max: Option<usize>) -> Result<()> {
    let n = self.targets.len();
    let problem = if n < min {
      "not enough arguments provided"
    } else if max.is_some_and(|max| n > max) {
      "too many arguments provided"
    } else {
      return Ok(());
    };

    self.out.write_all(describe_command(self.registry, self.command, true).as_bytes())?;
    Err(CliError::arg_parsing(problem).into())
  }

  /// Targets, or the current directory when none were given.
  fn targets_or_cwd(&self) -> Vec<String> {
    if self.targets.is_empty() {
      vec![".".to_string()]
    } else {
      self.targets.to_vec()
    }
  }

  fn submit(&mut self, targets: Vec<String>, editor: Option<String>) -> Result<()> {
    let request = Request { command: self.command.name, targets, editor, options: self.options };
    self.backend.submit(&request)
  }

  fn notify<'p>(&mut self, action: &str, paths: impl IntoIterator<Item = &'p String>) -> Result<()> {
    if let Some(feedback) = self.feedback.as_deref_mut() {
      for path in paths {
        feedback.notify(action, path)?;
      }
    }
    Ok(())
  }
}

pub fn add(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, None)?;
  inv.submit(inv.targets.to_vec(), None)?;
  inv.notify("A", inv.targets)
}

pub fn checkout(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, None)?;
  inv.submit(inv.targets.to_vec(), None)?;
  inv.notify("Checkout", inv.targets)
}

pub fn cleanup(inv: &mut Invocation<'_>) -> Result<()> {
  let targets = inv.targets_or_cwd();
  inv.submit(targets, None)
}

pub fn commit(inv: &mut Invocation<'_>) -> Result<()> {
  let targets = inv.targets_or_cwd();
  inv.submit(targets.clone(), None)?;
  inv.notify("Sending", &targets)
}

pub fn copy(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(2, Some(2))?;
  let targets = inv.targets;
  inv.submit(targets.to_vec(), None)?;
  inv.notify("A", &targets[1..])
}

pub fn delete(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, None)?;
  inv.submit(inv.targets.to_vec(), None)?;
  inv.notify("D", inv.targets)
}

pub fn diff(inv: &mut Invocation<'_>) -> Result<()> {
  let targets = inv.targets_or_cwd();
  inv.submit(targets, None)
}

pub fn import(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, Some(3))?;
  let targets = inv.targets;
  inv.submit(targets.to_vec(), None)?;
  inv.notify("Adding", &targets[1..])
}

pub fn log(inv: &mut Invocation<'_>) -> Result<()> {
  let targets = inv.targets_or_cwd();
  inv.submit(targets, None)
}

pub fn mkdir(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, None)?;
  inv.submit(inv.targets.to_vec(), None)?;
  inv.notify("A", inv.targets)
}

pub fn move_(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(2, Some(2))?;
  let targets = inv.targets;
  inv.submit(targets.to_vec(), None)?;
  inv.notify("D", &targets[..1])?;
  inv.notify("A", &targets[1..])
}

pub fn propdel(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, None)?;
  let targets = inv.targets;
  inv.submit(targets.to_vec(), None)?;
  inv.notify("Deleted", &targets[1..])
}

pub fn propedit(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, None)?;
  let editor = find_editor()?;
  inv.submit(inv.targets.to_vec(), Some(editor))
}

pub fn propget(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, None)?;
  inv.submit(inv.targets.to_vec(), None)
}

pub fn proplist(inv: &mut Invocation<'_>) -> Result<()> {
  let targets = inv.targets_or_cwd();
  inv.submit(targets, None)
}

pub fn propset(inv: &mut Invocation<'_>) -> Result<()> {
  // PROPVAL comes from --filedata when given.
  let min = if inv.options.filedata.is_some() { 1 } else { 2 };
  inv.require(min, None)?;
  let targets = inv.targets;
  inv.submit(targets.to_vec(), None)?;
  inv.notify("Set", &targets[min..])
}

pub fn revert(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, None)?;
  inv.submit(inv.targets.to_vec(), None)?;
  inv.notify("Reverted", inv.targets)
}

pub fn status(inv: &mut Invocation<'_>) -> Result<()> {
  let targets = inv.targets_or_cwd();
  inv.submit(targets, None)
}

pub fn switch(inv: &mut Invocation<'_>) -> Result<()> {
  inv.require(1, Some(2))?;
  inv.submit(inv.targets.to_vec(), None)
}

pub fn update(inv: &mut Invocation<'_>) -> Result<()> {
  let targets = inv.targets_or_cwd();
  inv.submit(targets.clone(), None)?;
  inv.notify("Updated", &targets)
}

fn find_editor() -> Result<String> {
  ["SVN_EDITOR", "EDITOR"]
    .iter()
    .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
    .ok_or_else(|| anyhow!("None of the environment variables SVN_EDITOR or EDITOR is set"))
}
