use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which range grammar rejected a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
  Revision,
  Date,
}

impl fmt::Display for RangeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RangeKind::Revision => f.write_str("Syntax error in revision argument"),
      RangeKind::Date => f.write_str("Unable to parse"),
    }
  }
}

/// Failures produced while interpreting a command line.
#[derive(Debug, Error)]
pub enum CliError {
  #[error("no arguments given")]
  NoArguments,

  #[error("{kind} \"{token}\"")]
  MalformedRange { kind: RangeKind, token: String },

  #[error("unknown command: {0}")]
  UnknownCommand(String),

  #[error("subcommand argument required")]
  MissingSubcommand,

  #[error("Log message file is a versioned file; use `--force' to override.")]
  VersionedLogFile,

  #[error("The locale `{0}' can not be set")]
  LocaleUnavailable(String),

  #[error("invalid option syntax: {0}")]
  InvalidOptions(String),

  #[error("Can't read file `{}'", path.display())]
  FileData {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{0}")]
  ArgParsing(String),

  #[error(transparent)]
  Handler(anyhow::Error),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl CliError {
  pub fn malformed_revision(token: impl Into<String>) -> Self {
    Self::MalformedRange { kind: RangeKind::Revision, token: token.into() }
  }

  pub fn malformed_date(token: impl Into<String>) -> Self {
    Self::MalformedRange { kind: RangeKind::Date, token: token.into() }
  }

  pub fn arg_parsing(msg: impl Into<String>) -> Self {
    Self::ArgParsing(msg.into())
  }

  /// Whether this is the argument-parsing kind raised by a handler after
  /// it already printed its own usage.
  pub fn is_arg_parsing(&self) -> bool {
    matches!(self, CliError::ArgParsing(_))
  }

  /// Failures that are followed by the generic usage listing.
  pub fn wants_generic_help(&self) -> bool {
    matches!(
      self,
      CliError::NoArguments
        | CliError::UnknownCommand(_)
        | CliError::MissingSubcommand
        | CliError::InvalidOptions(_)
    )
  }

  /// Whether the dispatcher should print anything for this failure.
  pub fn is_reportable(&self) -> bool {
    match self {
      CliError::Handler(inner) => !inner
        .downcast_ref::<CliError>()
        .is_some_and(CliError::is_arg_parsing),
      CliError::ArgParsing(_) | CliError::NoArguments | CliError::InvalidOptions(_) => false,
      _ => true,
    }
  }
}
