// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Drive one invocation: scan options, resolve the subcommand, check preconditions, invoke the handler
// role: processing/orchestrator
// inputs: Full argv; Registry; working-copy, locale, backend and feedback collaborators
// outputs: Result of the invocation; rendered failures on the console; ExitCode via execute
// side_effects: Reads --filedata files; switches process locale; writes help/errors to out/err
// invariants:
// - --help (or --version) always runs the canonical `help` command; positionals become its arguments
// - a versioned --filedata file without --force never reaches a handler
// - locale failures are reported and scanning continues
// - handler argument-parsing failures are not reported a second time
// errors: Typed CliError per stage; report() renders exactly one message per failure
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::cli::{self, ParsedOptions, Scan};
use crate::commands::backend::{Backend, Feedback};
use crate::commands::Invocation;
use crate::date::{parse_now_override, NaturalDates};
use crate::error::CliError;
use crate::help::generic_help;
use crate::locale::LocaleSetter;
use crate::options::code;
use crate::registry::Registry;
use crate::util;
use crate::wc::WorkingCopy;

pub struct Dispatcher<'a> {
  pub registry: &'a Registry,
  pub working_copy: &'a dyn WorkingCopy,
  pub locale: &'a mut dyn LocaleSetter,
  pub backend: &'a mut dyn Backend,
  pub feedback: &'a mut dyn Feedback,
  pub out: &'a mut dyn Write,
  pub err: &'a mut dyn Write,
}

/// Outcome of the option scanning phase.
struct Scanned {
  options: ParsedOptions,
  positionals: Vec<String>,
  log_file_versioned: bool,
}

impl Dispatcher<'_> {
  /// Run one invocation and render any failure; the exit status follows.
  pub fn execute(&mut self, argv: &[String]) -> ExitCode {
    match self.run(argv) {
      Ok(()) => ExitCode::SUCCESS,
      Err(err) => {
        if let Err(io) = self.report(&err) {
          warn!(error = %io, "could not write failure report");
        }
        ExitCode::FAILURE
      }
    }
  }

  pub fn run(&mut self, argv: &[String]) -> Result<(), CliError> {
    if argv.len() <= 1 {
      return Err(CliError::NoArguments);
    }

    let scan = cli::scan(argv)?;
    if scan.gen_man {
      let page = util::render_man_page(cli::command()).map_err(CliError::Handler)?;
      self.out.write_all(page.as_bytes())?;
      return Ok(());
    }

    let Scanned { options, mut positionals, log_file_versioned } = self.scan_options(scan)?;

    let registry = self.registry;
    let command = if options.help {
      registry
        .resolve_canonical("help")
        .ok_or_else(|| CliError::UnknownCommand("help".to_string()))?
    } else {
      if positionals.is_empty() {
        return Err(CliError::MissingSubcommand);
      }
      let name = positionals.remove(0);
      registry.resolve_canonical(&name).ok_or(CliError::UnknownCommand(name))?
    };
    debug!(command = command.name, targets = positionals.len(), "resolved subcommand");

    if log_file_versioned && !options.force {
      return Err(CliError::VersionedLogFile);
    }

    let feedback: Option<&mut dyn Feedback> = if options.quiet { None } else { Some(&mut *self.feedback) };
    let mut invocation = Invocation {
      command,
      registry,
      targets: &positionals,
      options: &options,
      out: &mut *self.out,
      err: &mut *self.err,
      backend: &mut *self.backend,
      feedback,
    };

    (command.handler)(&mut invocation).map_err(CliError::Handler)
  }

  fn scan_options(&mut self, scan: Scan) -> Result<Scanned, CliError> {
    let dates = NaturalDates::anchored_at(parse_now_override(scan.now_override.as_deref()));
    let mut options = ParsedOptions::default();
    let mut log_file_versioned = false;

    for occurrence in &scan.occurrences {
      options.apply(occurrence, &dates)?;
      let Some(value) = occurrence.value.as_deref() else {
        continue;
      };

      match occurrence.code {
        code::LOCALE => self.apply_locale(value)?,
        code::FILEDATA => {
          let path = Path::new(value);
          let contents = std::fs::read_to_string(path)
            .map_err(|source| CliError::FileData { path: path.to_path_buf(), source })?;
          options.filedata = Some(contents);
          if self.working_copy.is_versioned(path) {
            debug!(path = value, "message file is under version control");
            log_file_versioned = true;
          }
        }
        _ => {}
      }
    }

    Ok(Scanned { options, positionals: scan.positionals, log_file_versioned })
  }

  fn apply_locale(&mut self, name: &str) -> Result<(), CliError> {
    match self.locale.apply(name) {
      Ok(()) => {
        debug!(locale = name, "locale applied");
        Ok(())
      }
      Err(err) => {
        warn!(locale = name, "locale unavailable; continuing");
        writeln!(self.err, "svn: {err}")?;
        Ok(())
      }
    }
  }

  /// Render a failure: its message on stderr, then generic usage when it
  /// concerns the command line as a whole.
  pub fn report(&mut self, err: &CliError) -> std::io::Result<()> {
    if let CliError::InvalidOptions(detail) = err {
      debug!(%detail, "option scan failed");
    }

    match err {
      CliError::UnknownCommand(_) | CliError::MissingSubcommand => writeln!(self.err, "{err}")?,
      e if e.is_reportable() => writeln!(self.err, "svn: {e:#}")?,
      _ => {}
    }

    if err.wants_generic_help() {
      self.out.write_all(generic_help(self.registry).as_bytes())?;
    }
    Ok(())
  }
}
