use std::io;
use std::process::ExitCode;

mod cli;
mod commands;
mod date;
mod dispatch;
mod error;
mod help;
mod locale;
mod options;
mod registry;
mod revision;
mod util;
mod wc;

use crate::commands::backend::{ConsoleFeedback, JsonBackend};
use crate::dispatch::Dispatcher;
use crate::locale::{LocaleSetter, ProcessLocale};
use crate::wc::AdminArea;

fn main() -> ExitCode {
  util::init_logging();

  // Start from the portable locale; --locale may switch it later.
  let mut locale = ProcessLocale;
  if let Err(err) = locale.apply("C") {
    tracing::debug!(error = %err, "default locale unavailable");
  }

  let argv: Vec<String> = std::env::args_os().map(|a| a.to_string_lossy().into_owned()).collect();

  let mut backend = JsonBackend::new(io::stdout());
  let mut feedback = ConsoleFeedback::new(io::stderr());
  let mut out = io::stdout();
  let mut err = io::stderr();

  let mut dispatcher = Dispatcher {
    registry: registry::standard(),
    working_copy: &AdminArea,
    locale: &mut locale,
    backend: &mut backend,
    feedback: &mut feedback,
    out: &mut out,
    err: &mut err,
  };

  dispatcher.execute(&argv)
}
