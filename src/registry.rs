// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Table of canonical subcommands and their aliases; name lookup and canonicalization
// role: registry/resolver
// inputs: Subcommand tokens from argv or from `help` arguments
// outputs: CommandDescriptor for canonical commands; NameEntry for any registered name
// invariants:
// - every alias holds the id of its canonical command, fixed at construction
// - lookup is exact and case-sensitive; first registered match wins
// - list_canonical preserves registration order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;

use crate::commands::{self, Handler};
use crate::options::{code, OptionCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(usize);

/// A canonical command: its handler, help text and accepted options.
pub struct CommandDescriptor {
  pub id: CommandId,
  pub name: &'static str,
  pub handler: Handler,
  pub help: &'static str,
  pub options: &'static [OptionCode],
}

impl std::fmt::Debug for CommandDescriptor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CommandDescriptor")
      .field("name", &self.name)
      .field("options", &self.options)
      .finish_non_exhaustive()
  }
}

impl PartialEq for CommandDescriptor {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

/// Any registered name, canonical or alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry {
  pub name: &'static str,
  pub is_alias: bool,
  pub command: CommandId,
}

#[derive(Debug, Default)]
pub struct Registry {
  commands: Vec<CommandDescriptor>,
  names: Vec<NameEntry>,
}

impl Registry {
  pub fn builder() -> RegistryBuilder {
    RegistryBuilder::default()
  }

  /// Exact match against every registered name, in registration order.
  pub fn find_by_name(&self, token: &str) -> Option<&NameEntry> {
    self.names.iter().find(|entry| entry.name == token)
  }

  pub fn resolve_canonical(&self, token: &str) -> Option<&CommandDescriptor> {
    self.find_by_name(token).map(|entry| self.get(entry.command))
  }

  pub fn get(&self, id: CommandId) -> &CommandDescriptor {
    &self.commands[id.0]
  }

  pub fn list_canonical(&self) -> impl Iterator<Item = &CommandDescriptor> {
    self.commands.iter()
  }

  pub fn aliases(&self, id: CommandId) -> impl Iterator<Item = &'static str> + '_ {
    self
      .names
      .iter()
      .filter(move |entry| entry.is_alias && entry.command == id)
      .map(|entry| entry.name)
  }
}

#[derive(Default)]
pub struct RegistryBuilder {
  inner: Registry,
}

impl RegistryBuilder {
  pub fn command(
    mut self,
    name: &'static str,
    handler: Handler,
    help: &'static str,
    options: &'static [OptionCode],
  ) -> Self {
    let id = CommandId(self.inner.commands.len());
    self.inner.commands.push(CommandDescriptor { id, name, handler, help, options });
    self.inner.names.push(NameEntry { name, is_alias: false, command: id });
    self
  }

  /// Register `name` as an alias of the most recently added command.
  /// Aliases given before any command are ignored.
  pub fn alias(mut self, name: &'static str) -> Self {
    if let Some(last) = self.inner.commands.last() {
      let command = last.id;
      self.inner.names.push(NameEntry { name, is_alias: true, command });
    }
    self
  }

  pub fn build(self) -> Registry {
    self.inner
  }
}

static STANDARD: Lazy<Registry> = Lazy::new(standard_commands);

/// The built-in subcommand table.
pub fn standard() -> &'static Registry {
  &STANDARD
}

fn standard_commands() -> Registry {
  use code::*;

  Registry::builder()
    .command(
      "add",
      commands::add,
      "Add new files and directories to version control.\n\
       usage: add [TARGETS]\n",
      &[REVISION],
    )
    .alias("ad")
    .alias("new")
    .command(
      "checkout",
      commands::checkout,
      "Check out a working directory from a repository.\n\
       usage: checkout REPOS_URL1 [REPOS_URL2 REPOS_URL3...]\n",
      &[USERNAME, PASSWORD, XML_FILE, DESTINATION, QUIET, NONRECURSIVE, DATE, REVISION],
    )
    .alias("co")
    .command(
      "cleanup",
      commands::cleanup,
      "Recursively clean up the working copy, removing locks, resuming\n\
       unfinished operations, etc.\n\
       usage: cleanup [TARGETS]\n",
      &[],
    )
    .command(
      "commit",
      commands::commit,
      "Commit changes from your working copy to the repository.\n\
       usage: commit [TARGETS]\n",
      &[FILEDATA, MESSAGE, USERNAME, PASSWORD, XML_FILE, QUIET, REVISION],
    )
    .alias("ci")
    .command(
      "copy",
      commands::copy,
      "Duplicate something in your working copy, remembering history.\n\
       usage: copy SRC_PATH DST_PATH.\n",
      &[FILEDATA, MESSAGE, REVISION, USERNAME, PASSWORD],
    )
    .alias("cp")
    .command(
      "delete",
      commands::delete,
      "Remove files and directories from version control.\n\
       usage: delete [TARGET]\n       \
       delete REPOS_URL1 [[REPOS_URL2] ... ]\n",
      &[FILEDATA, MESSAGE, USERNAME, PASSWORD, FORCE],
    )
    .alias("del")
    .alias("remove")
    .alias("rm")
    .command(
      "diff",
      commands::diff,
      "Display local changes in the working copy, or changes between the\n\
       working copy and the repository if a revision is given.\n\
       usage: diff [-r REV] [TARGETS]\n",
      &[USERNAME, PASSWORD, EXTENSIONS, REVISION, DESTINATION, NONRECURSIVE],
    )
    .alias("di")
    .command(
      "help",
      commands::help,
      "Display this usage message.\n\
       usage: help [SUBCOMMAND1 [SUBCOMMAND2] ...]\n",
      &[VERSION],
    )
    .alias("?")
    .alias("h")
    .command(
      "import",
      commands::import,
      "Import a file or tree into the repository.\n\
       usage: import REPOS_URL [PATH] [NEW_ENTRY_IN_REPOS] \n",
      &[FILEDATA, MESSAGE, USERNAME, PASSWORD, XML_FILE, QUIET, REVISION],
    )
    .command(
      "log",
      commands::log,
      "Show the log messages for a set of revision(s) and/or file(s).\n\
       usage: log [-r REV1([:)REV2]] [PATH1 [PATH2] ...] \n",
      &[USERNAME, PASSWORD, REVISION, VERBOSE],
    )
    .command(
      "mkdir",
      commands::mkdir,
      "Create a new directory under revision control.\n\
       usage: mkdir [NEW_DIR | REPOS_URL].\n",
      &[USERNAME, PASSWORD, MESSAGE, FILEDATA],
    )
    .command(
      "move",
      commands::move_,
      "Move or rename something in working copy.\n\
       usage: move SRC_PATH DST_PATH.\n",
      &[USERNAME, PASSWORD, MESSAGE, FILEDATA, REVISION],
    )
    .alias("mv")
    .alias("rename")
    .alias("ren")
    .command(
      "propdel",
      commands::propdel,
      "Remove property PROPNAME on files and directories.\n\
       usage: propdel PROPNAME [TARGETS]\n",
      &[QUIET, RECURSIVE],
    )
    .alias("pdel")
    .command(
      "propedit",
      commands::propedit,
      "Edit property PROPNAME with $EDITOR on files and directories.\n\
       usage: propedit PROPNAME [TARGETS]\n",
      &[],
    )
    .alias("pedit")
    .alias("pe")
    .command(
      "propget",
      commands::propget,
      "Get the value of property PROPNAME on files and directories.\n\
       usage: propget PROPNAME [TARGETS]\n",
      &[RECURSIVE],
    )
    .alias("pget")
    .alias("pg")
    .command(
      "proplist",
      commands::proplist,
      "List all properties for given files and directories.\n\
       usage: proplist [TARGETS]\n",
      &[RECURSIVE],
    )
    .alias("plist")
    .alias("pl")
    .command(
      "propset",
      commands::propset,
      "Set property PROPNAME to PROPVAL on files and directories.\n\
       usage: propset PROPNAME [PROPVAL | -F/--filedata VALFILE] [TARGETS]\n",
      &[FILEDATA, QUIET, RECURSIVE],
    )
    .alias("pset")
    .alias("ps")
    .command(
      "revert",
      commands::revert,
      "Restore pristine working copy file (undo all local edits)\n\
       usage: revert [TARGETS]\n",
      &[RECURSIVE],
    )
    .command(
      "status",
      commands::status,
      "Print the status of working copy files and directories.\n\
       usage: status [TARGETS]\n",
      &[USERNAME, PASSWORD, SHOW_UPDATES, NONRECURSIVE, VERBOSE, QUIET],
    )
    .alias("stat")
    .alias("st")
    .command(
      "switch",
      commands::switch,
      "Update existing working copy files and directories to become\n\
       a working copy of a different repository URL.\n\
       usage: switch [TARGET] REPOS_URL\n",
      &[],
    )
    .alias("sw")
    .command(
      "update",
      commands::update,
      "Bring changes from the repository into the working copy.\n\
       usage: update [TARGETS]\n",
      &[USERNAME, PASSWORD, REVISION, DATE, NONRECURSIVE, XML_FILE],
    )
    .alias("up")
    .build()
}
