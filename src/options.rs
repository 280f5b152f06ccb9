// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Static catalog of every recognized flag (long name, code, argument arity, help text)
// role: model/catalog
// outputs: OptionSpec table in declaration order; code -> spec lookup
// invariants:
// - codes are unique; printable ASCII codes double as the short flag
// - long-only options use codes above 255
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Unique identifier of a recognized flag.
pub type OptionCode = u32;

pub mod code {
  use super::OptionCode;

  pub const DESTINATION: OptionCode = b'd' as OptionCode;
  pub const HELP: OptionCode = b'h' as OptionCode;
  pub const MESSAGE: OptionCode = b'm' as OptionCode;
  pub const QUIET: OptionCode = b'q' as OptionCode;
  pub const NONRECURSIVE: OptionCode = b'n' as OptionCode;
  pub const REVISION: OptionCode = b'r' as OptionCode;
  pub const DATE: OptionCode = b'D' as OptionCode;
  pub const FILEDATA: OptionCode = b'F' as OptionCode;
  pub const VERBOSE: OptionCode = b'v' as OptionCode;
  pub const VERY_VERBOSE: OptionCode = b'V' as OptionCode;
  pub const SHOW_UPDATES: OptionCode = b'u' as OptionCode;
  pub const EXTENSIONS: OptionCode = b'x' as OptionCode;

  pub const FORCE: OptionCode = 256;
  pub const RECURSIVE: OptionCode = 257;
  pub const XML_FILE: OptionCode = 258;
  pub const LOCALE: OptionCode = 259;
  pub const VERSION: OptionCode = 260;
  pub const USERNAME: OptionCode = 261;
  pub const PASSWORD: OptionCode = 262;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
  pub long_name: &'static str,
  pub code: OptionCode,
  pub takes_argument: bool,
  pub description: &'static str,
}

impl OptionSpec {
  /// Single-character form, when the code is a printable ASCII character.
  pub fn short(&self) -> Option<char> {
    u8::try_from(self.code)
      .ok()
      .filter(|b| b.is_ascii_graphic())
      .map(char::from)
  }
}

const fn opt(long_name: &'static str, code: OptionCode, takes_argument: bool, description: &'static str) -> OptionSpec {
  OptionSpec { long_name, code, takes_argument, description }
}

static OPTIONS: &[OptionSpec] = &[
  opt("destination", code::DESTINATION, true, "put results in newly-created directory name"),
  opt("force", code::FORCE, false, "force operation to run"),
  opt("help", code::HELP, false, "show help on a subcommand"),
  opt("message", code::MESSAGE, true, "specify commit message"),
  opt("quiet", code::QUIET, false, "print as little as possible"),
  opt("recursive", code::RECURSIVE, false, "descend recursively"),
  opt("nonrecursive", code::NONRECURSIVE, false, "operate on single directory only"),
  opt("revision", code::REVISION, true, "specify revision number (or X:Y range)"),
  opt("date", code::DATE, true, "specify a date (instead of a revision)"),
  opt("filedata", code::FILEDATA, true, "read data from specified file"),
  opt("xml-file", code::XML_FILE, true, "read/write xml to specified file"),
  opt("locale", code::LOCALE, true, "specify a locale to use"),
  opt("version", code::VERSION, false, "print client version info"),
  opt("verbose", code::VERBOSE, false, "print extra information"),
  opt("very-verbose", code::VERY_VERBOSE, false, "print maximum information"),
  opt("show-updates", code::SHOW_UPDATES, false, "display update information"),
  opt("username", code::USERNAME, true, "specify a username [optional]"),
  opt("password", code::PASSWORD, true, "specify a password [optional]"),
  opt("extensions", code::EXTENSIONS, true, "pass options through to GNU diff process"),
];

static BY_CODE: Lazy<HashMap<OptionCode, &'static OptionSpec>> =
  Lazy::new(|| OPTIONS.iter().map(|spec| (spec.code, spec)).collect());

/// All recognized options, in declaration order.
pub fn all() -> &'static [OptionSpec] {
  OPTIONS
}

pub fn lookup(code: OptionCode) -> Option<&'static OptionSpec> {
  BY_CODE.get(&code).copied()
}
