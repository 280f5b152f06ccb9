use std::io::Write;

use anyhow::Result;

use super::Invocation;
use crate::help::{describe_command, generic_help, version_banner};

/// `help [SUBCOMMAND...]`: per-command help for each name, otherwise the
/// generic usage. `--version` puts the version banner first and drops the usage.
pub fn help(inv: &mut Invocation<'_>) -> Result<()> {
  if inv.options.version {
    inv.out.write_all(version_banner().as_bytes())?;
  } else if inv.targets.is_empty() {
    inv.out.write_all(generic_help(inv.registry).as_bytes())?;
  }

  for name in inv.targets {
    match inv.registry.resolve_canonical(name) {
      Some(cmd) => inv.out.write_all(describe_command(inv.registry, cmd, true).as_bytes())?,
      None => write!(inv.err, "\"{name}\": unknown command.\n\n")?,
    }
  }
  Ok(())
}
