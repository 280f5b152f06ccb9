// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Process-level helpers: diagnostic logging setup and man page rendering
// role: utilities/helpers
// inputs: SVN_LOG environment filter; clap Command
// outputs: Installed tracing subscriber; troff man page text
// side_effects: init_logging installs a global subscriber (first call wins)
// invariants: Diagnostics go to stderr only; stdout stays reserved for command output
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SVN_LOG";

/// Install a stderr `tracing` subscriber filtered by `SVN_LOG` (default: warn).
pub fn init_logging() {
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

/// Render a section-1 man page for a clap `Command`.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page(cmd: clap::Command) -> anyhow::Result<String> {
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_man_page_produces_troff_text() {
    let page = render_man_page(crate::cli::command()).expect("render manpage");
    assert!(page.contains(".TH"));
    assert!(page.contains("revision"));
    assert!(!page.contains("override"));
  }

  #[test]
  fn init_logging_is_idempotent() {
    init_logging();
    init_logging();
  }
}
