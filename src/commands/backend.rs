// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Seams to the repository/working-copy layer (Backend) and to progress output (Feedback)
// role: integration/seams
// inputs: Request built by a subcommand handler; per-target notifications
// outputs: Pretty JSON request on the backend sink; one feedback line per notification
// side_effects: Writes to the provided sinks (stdout / stderr in the binary)
// invariants: Passwords never reach the JSON output (ParsedOptions skips them)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::ParsedOptions;

/// A validated subcommand request.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
  pub command: &'a str,
  pub targets: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub editor: Option<String>,
  pub options: &'a ParsedOptions,
}

/// Carries out subcommand requests.
pub trait Backend {
  fn submit(&mut self, request: &Request<'_>) -> Result<()>;
}

/// Prints each request as pretty JSON.
pub struct JsonBackend<W: Write> {
  sink: W,
}

impl<W: Write> JsonBackend<W> {
  pub fn new(sink: W) -> Self {
    Self { sink }
  }
}

impl<W: Write> Backend for JsonBackend<W> {
  fn submit(&mut self, request: &Request<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut self.sink, request)
      .with_context(|| format!("writing {} request", request.command))?;
    writeln!(self.sink)?;
    Ok(())
  }
}

/// Progress hook; only installed when `--quiet` is absent.
pub trait Feedback {
  fn notify(&mut self, action: &str, path: &str) -> std::io::Result<()>;
}

pub struct ConsoleFeedback<W: Write> {
  sink: W,
}

impl<W: Write> ConsoleFeedback<W> {
  pub fn new(sink: W) -> Self {
    Self { sink }
  }
}

impl<W: Write> Feedback for ConsoleFeedback<W> {
  fn notify(&mut self, action: &str, path: &str) -> std::io::Result<()> {
    writeln!(self.sink, "{action:<10}{path}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_backend_writes_request() {
    let options = ParsedOptions { message: Some("fix".into()), password: Some("pw".into()), ..Default::default() };
    let request = Request { command: "commit", targets: vec![".".into()], editor: None, options: &options };

    let mut backend = JsonBackend::new(Vec::new());
    backend.submit(&request).unwrap();

    let v: serde_json::Value = serde_json::from_slice(&backend.sink).unwrap();
    assert_eq!(v["command"], "commit");
    assert_eq!(v["targets"][0], ".");
    assert_eq!(v["options"]["message"], "fix");
    assert_eq!(v["options"]["revision"]["start"], "head");
    assert_eq!(v["options"]["revision"]["end"], 1);
    assert!(v.get("editor").is_none());
    assert!(v["options"].get("password").is_none());
  }

  #[test]
  fn console_feedback_pads_action() {
    let mut fb = ConsoleFeedback::new(Vec::new());
    fb.notify("A", "foo.c").unwrap();
    fb.notify("Reverted", "bar.c").unwrap();
    assert_eq!(String::from_utf8(fb.sink).unwrap(), "A         foo.c\nReverted  bar.c\n");
  }
}
