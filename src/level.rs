use std::fmt;
use std::str::FromStr;

use crate::color::{COLOR_ERROR, COLOR_INFO, COLOR_WARNING, ColorSpec};

/// Severity channels a rendered line can be sent to.
///
/// `Level::Info` is the default. `Level::Debug` is the pass-through
/// channel: markup in debug messages is never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
  /// Verbatim diagnostics channel.
  Debug,
  /// Regular progress output.
  Info,
  /// Recoverable problems.
  Warn,
  /// Failures.
  Error,
}

impl Level {
  /// Returns the canonical lowercase string representation of the level.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Debug => "debug",
      Self::Info => "info",
      Self::Warn => "warn",
      Self::Error => "error",
    }
  }

  /// Base color lines at this level are rendered in.
  ///
  /// `None` for the debug channel, which bypasses rendering entirely.
  pub const fn base_color(self) -> Option<ColorSpec> {
    match self {
      Self::Debug => None,
      Self::Info => Some(COLOR_INFO),
      Self::Warn => Some(COLOR_WARNING),
      Self::Error => Some(COLOR_ERROR),
    }
  }
}

impl Default for Level {
  fn default() -> Self {
    Self::Info
  }
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when parsing a [`Level`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
  input: String,
}

impl ParseLevelError {
  /// Creates a new parse error capturing the offending input.
  pub fn new(input: impl Into<String>) -> Self {
    Self {
      input: input.into(),
    }
  }

  /// Returns the original input that failed to parse.
  pub fn input(&self) -> &str {
    &self.input
  }
}

impl fmt::Display for ParseLevelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unsupported level `{}`", self.input)
  }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
  type Err = ParseLevelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_ascii_lowercase();
    match normalized.as_str() {
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" | "warning" => Ok(Self::Warn),
      "error" | "err" => Ok(Self::Error),
      _ => Err(ParseLevelError::new(s)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_info() {
    assert_eq!(Level::default(), Level::Info);
  }

  #[test]
  fn base_colors_match_channel_expectations() {
    assert_eq!(Level::Info.base_color(), Some(COLOR_INFO));
    assert_eq!(Level::Warn.base_color(), Some(COLOR_WARNING));
    assert_eq!(Level::Error.base_color(), Some(COLOR_ERROR));
    assert_eq!(Level::Debug.base_color(), None);
  }

  #[test]
  fn parse_accepts_common_aliases() {
    assert_eq!("info".parse::<Level>(), Ok(Level::Info));
    assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
    assert_eq!("err".parse::<Level>(), Ok(Level::Error));
    assert_eq!(" debug ".parse::<Level>(), Ok(Level::Debug));
  }

  #[test]
  fn parse_rejects_unknown_values() {
    let err = "chatty".parse::<Level>().unwrap_err();
    assert_eq!(err.input(), "chatty");
    assert_eq!(err.to_string(), "unsupported level `chatty`");
  }
}
