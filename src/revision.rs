use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::CliError;

// One side of a range: all digits (possibly none), or "h"/"head" in any case.
static SIDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[0-9]*|(?i:h|head))$").expect("static regex"));

/// One bound of a revision range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
  /// The youngest revision in the repository.
  Head,
  Number(u64),
}

impl Revision {
  pub const OLDEST: Revision = Revision::Number(1);
}

impl Serialize for Revision {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Revision::Head => serializer.serialize_str("head"),
      Revision::Number(n) => serializer.serialize_u64(*n),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevisionRange {
  pub start: Revision,
  pub end: Revision,
}

impl Default for RevisionRange {
  fn default() -> Self {
    Self { start: Revision::Head, end: Revision::OLDEST }
  }
}

impl RevisionRange {
  /// Parse "N", "N:M", "N:head", "head:N", "N:", ":N" and friends.
  ///
  /// A bare side sets both bounds. An empty side means head.
  pub fn parse(token: &str) -> Result<Self, CliError> {
    let (left, right) = match token.split_once(':') {
      Some((_, rest)) if rest.contains(':') => return Err(CliError::malformed_revision(token)),
      Some(sides) => sides,
      None => (token, token),
    };

    let start = resolve_side(left).ok_or_else(|| CliError::malformed_revision(token))?;
    let end = resolve_side(right).ok_or_else(|| CliError::malformed_revision(token))?;

    Ok(Self { start, end })
  }
}

fn resolve_side(side: &str) -> Option<Revision> {
  if !SIDE.is_match(side) {
    return None;
  }
  if side.is_empty() || side.starts_with(['h', 'H']) {
    return Some(Revision::Head);
  }
  side.parse().ok().map(Revision::Number)
}
