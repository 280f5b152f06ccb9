use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;

use crate::date::{DateParser, DateRange};
use crate::error::CliError;
use crate::options::{self, code, OptionCode, OptionSpec};
use crate::revision::RevisionRange;

pub const PROGRAM: &str = "svn";

const ARGS: &str = "args";
const GEN_MAN: &str = "gen-man";
const NOW_OVERRIDE: &str = "now-override";

/// Build the flag scanner from the Option Catalog.
///
/// Options may appear before, between or after positional arguments.
pub fn command() -> Command {
  let cmd = Command::new(PROGRAM)
    .about("Subversion command-line client")
    .version(env!("CARGO_PKG_VERSION"))
    .disable_help_flag(true)
    .disable_version_flag(true)
    .arg(
      Arg::new(ARGS)
        .value_name("ARGS")
        .help("Subcommand followed by its arguments")
        .action(ArgAction::Append),
    )
    // Emit a troff man page to stdout (internal; for packaging)
    .arg(Arg::new(GEN_MAN).long(GEN_MAN).action(ArgAction::SetTrue).hide(true))
    // Override the "now" instant for relative dates (hidden; tests only)
    .arg(Arg::new(NOW_OVERRIDE).long(NOW_OVERRIDE).num_args(1).hide(true));

  options::all().iter().fold(cmd, |cmd, spec| cmd.arg(option_arg(spec)))
}

fn option_arg(spec: &OptionSpec) -> Arg {
  let mut arg = Arg::new(spec.long_name).long(spec.long_name).help(spec.description);
  if let Some(c) = spec.short() {
    arg = arg.short(c);
  }
  if spec.code == code::HELP {
    arg = arg.short_alias('?');
  }
  if spec.takes_argument {
    // The next word is the value even when it starts with '-' (`-x -b`, `-r -1`).
    arg.num_args(1).allow_hyphen_values(true).action(ArgAction::Append)
  } else {
    arg.action(ArgAction::Count)
  }
}

/// One recognized flag as it appeared on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
  pub code: OptionCode,
  pub value: Option<String>,
  index: usize,
}

#[derive(Debug, Default)]
pub struct Scan {
  /// Recognized flags in command-line order.
  pub occurrences: Vec<Occurrence>,
  pub positionals: Vec<String>,
  pub gen_man: bool,
  pub now_override: Option<String>,
}

/// Run the generic scanner over a full argv (program name first).
pub fn scan(argv: &[String]) -> Result<Scan, CliError> {
  let matches = command()
    .try_get_matches_from(argv)
    .map_err(|e| CliError::InvalidOptions(e.to_string().trim().to_string()))?;

  let mut occurrences: Vec<Occurrence> = options::all()
    .iter()
    .flat_map(|spec| occurrences_of(&matches, spec))
    .collect();
  occurrences.sort_by_key(|o| o.index);

  Ok(Scan {
    occurrences,
    positionals: matches.get_many::<String>(ARGS).into_iter().flatten().cloned().collect(),
    gen_man: matches.get_flag(GEN_MAN),
    now_override: matches.get_one::<String>(NOW_OVERRIDE).cloned(),
  })
}

fn occurrences_of(matches: &ArgMatches, spec: &OptionSpec) -> Vec<Occurrence> {
  let id = spec.long_name;
  if spec.takes_argument {
    let indices = matches.indices_of(id).into_iter().flatten();
    let values = matches.get_many::<String>(id).into_iter().flatten();
    indices
      .zip(values)
      .map(|(index, value)| Occurrence { code: spec.code, value: Some(value.clone()), index })
      .collect()
  } else if matches.get_count(id) > 0 {
    let index = matches.index_of(id).unwrap_or_default();
    vec![Occurrence { code: spec.code, value: None, index }]
  } else {
    Vec::new()
  }
}

/// Everything the option scan produced, handed to the subcommand.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedOptions {
  pub destination: Option<String>,
  pub force: bool,
  pub help: bool,
  pub message: Option<String>,
  pub quiet: bool,
  pub recursive: bool,
  pub nonrecursive: bool,
  pub revision: RevisionRange,
  pub date: DateRange,
  /// Contents of the `--filedata` file.
  pub filedata: Option<String>,
  #[serde(skip)]
  pub filedata_path: Option<PathBuf>,
  pub xml_file: Option<String>,
  pub locale: Option<String>,
  pub version: bool,
  pub verbose: bool,
  pub very_verbose: bool,
  pub show_updates: bool,
  pub username: Option<String>,
  #[serde(skip)]
  pub password: Option<String>,
  pub extensions: Option<String>,
}

impl ParsedOptions {
  /// Record one flag. Range flags are parsed here; file loading and
  /// locale switching are left to the caller.
  pub fn apply(&mut self, occurrence: &Occurrence, dates: &dyn DateParser) -> Result<(), CliError> {
    let raw = occurrence.value.as_deref().unwrap_or_default();
    let value = occurrence.value.clone();

    match occurrence.code {
      code::DESTINATION => self.destination = value,
      code::FORCE => self.force = true,
      code::HELP => self.help = true,
      code::MESSAGE => self.message = value,
      code::QUIET => self.quiet = true,
      code::RECURSIVE => self.recursive = true,
      code::NONRECURSIVE => self.nonrecursive = true,
      code::REVISION => self.revision = RevisionRange::parse(raw)?,
      code::DATE => self.date.apply(raw, dates)?,
      code::FILEDATA => self.filedata_path = value.map(PathBuf::from),
      code::XML_FILE => self.xml_file = value,
      code::LOCALE => self.locale = value,
      code::VERSION => {
        self.version = true;
        self.help = true;
      }
      code::VERBOSE => self.verbose = true,
      code::VERY_VERBOSE => self.very_verbose = true,
      code::SHOW_UPDATES => self.show_updates = true,
      code::USERNAME => self.username = value,
      code::PASSWORD => self.password = value,
      code::EXTENSIONS => self.extensions = value,
      other => tracing::debug!(code = other, "ignoring option without a setting"),
    }

    Ok(())
  }
}
