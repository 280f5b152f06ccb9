// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render generic usage, per-command help and the version banner as plain text
// role: rendering/help
// inputs: Registry, CommandDescriptor, Option Catalog
// outputs: Strings ready to be written to stdout
// invariants:
// - aliases follow the canonical name in registration order, parenthesized and comma-separated
// - option lines keep the command's declared option order; short form only for printable codes
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt::Write as _;

use crate::cli::PROGRAM;
use crate::options::{self, OptionSpec};
use crate::registry::{CommandDescriptor, Registry};

const USAGE: &str = "usage: svn <subcommand> [options] [args]\n\
Type \"svn help <subcommand>\" for help on a specific subcommand.\n\
\n\
Most subcommands take file and/or directory arguments, recursing\n\
on the directories.  If no arguments are supplied to such a\n\
command, it will recurse on the current directory (inclusive) by\n\
default.\n\
\n\
Available subcommands:\n";

const INFO: &str = "Subversion is a tool for revision control.\n\
For additional information, see http://subversion.tigris.org\n";

pub fn render_option(spec: &OptionSpec) -> String {
  let mut line = format!("  --{}", spec.long_name);
  if let Some(c) = spec.short() {
    let _ = write!(line, " (-{c})");
  }
  let _ = writeln!(line, ":  {}", spec.description);
  line
}

/// Canonical name plus aliases; with `verbose`, the help text and accepted options too.
pub fn describe_command(registry: &Registry, cmd: &CommandDescriptor, verbose: bool) -> String {
  let mut text = cmd.name.to_string();

  let aliases: Vec<_> = registry.aliases(cmd.id).collect();
  if !aliases.is_empty() {
    let _ = write!(text, " ({})", aliases.join(", "));
  }

  if verbose {
    let _ = writeln!(text, ": {}", cmd.help);
    for spec in cmd.options.iter().filter_map(|code| options::lookup(*code)) {
      text.push_str(&render_option(spec));
    }
    text.push('\n');
  }

  text
}

pub fn generic_help(registry: &Registry) -> String {
  let mut text = String::from(USAGE);
  for cmd in registry.list_canonical() {
    let _ = writeln!(text, "   {}", describe_command(registry, cmd, false));
  }
  let _ = writeln!(text, "\n{INFO}");
  text
}

pub fn version_banner() -> String {
  format!(
    "{PROGRAM}, version {}\n   compiled with {} {}\n\n{INFO}",
    env!("CARGO_PKG_VERSION"),
    env!("CARGO_PKG_NAME"),
    env!("CARGO_PKG_VERSION"),
  )
}
