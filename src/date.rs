use chrono::{DateTime, Local};
use chrono_english::{parse_date_string, Dialect};
use serde::Serialize;
use two_timer::parse as parse_natural;

use crate::error::CliError;

/// Free-form date grammar used for each side of a date range.
pub trait DateParser {
  fn parse(&self, text: &str) -> Option<DateTime<Local>>;
}

/// Natural-language dates ("2024-01-05", "yesterday", "3 days ago", "last friday").
///
/// Relative phrases are anchored at `now`, or the wall clock when unset.
#[derive(Debug, Clone, Default)]
pub struct NaturalDates {
  pub now: Option<DateTime<Local>>,
}

impl NaturalDates {
  pub fn anchored_at(now: Option<DateTime<Local>>) -> Self {
    Self { now }
  }
}

impl DateParser for NaturalDates {
  fn parse(&self, text: &str) -> Option<DateTime<Local>> {
    let phrase = text.trim();
    if phrase.is_empty() {
      return None;
    }
    let now = self.now.unwrap_or_else(Local::now);

    if let Ok(dt) = parse_date_string(phrase, now, Dialect::Us) {
      return Some(dt);
    }

    // Calendar phrases ("last week", "june 2024") resolve to the start of their span.
    parse_natural(&phrase.to_lowercase(), None)
      .ok()
      .and_then(|(start, _end, _)| start.and_local_timezone(Local).single())
  }
}

/// Parse a `--now-override` string into a local DateTime.
/// Accepts RFC3339 (e.g. 2025-08-15T12:00:00Z) or a naive local timestamp
/// formatted as `%Y-%m-%dT%H:%M:%S`.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Local>> {
  s.and_then(|raw| {
    DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Local))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .and_then(|ndt| ndt.and_local_timezone(Local).single())
      })
  })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
  pub start: Option<DateTime<Local>>,
  pub end: Option<DateTime<Local>>,
}

impl DateRange {
  /// Apply "X", "X:", ":Y" or "X:Y" on top of the current bounds.
  ///
  /// An empty side leaves its bound as it was; a bare date sets both.
  pub fn apply(&mut self, token: &str, dates: &dyn DateParser) -> Result<(), CliError> {
    let parse = |text: &str| dates.parse(text).ok_or_else(|| CliError::malformed_date(token));

    match token.split_once(':') {
      Some((_, right)) if right.contains(':') => Err(CliError::malformed_date(token)),
      Some((left, right)) => {
        let start = if left.is_empty() { None } else { Some(parse(left)?) };
        let end = if right.is_empty() { None } else { Some(parse(right)?) };
        if start.is_some() {
          self.start = start;
        }
        if end.is_some() {
          self.end = end;
        }
        Ok(())
      }
      None => {
        let at = parse(token)?;
        self.start = Some(at);
        self.end = Some(at);
        Ok(())
      }
    }
  }
}
