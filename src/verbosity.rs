use std::fmt;
use std::str::FromStr;

/// Named groups that verbose log calls are filed under.
///
/// The vocabulary is closed: a configuration string may only enable groups
/// listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerboseCategory {
  Build,
  Api,
}

impl VerboseCategory {
  const ALL: [Self; 2] = [Self::Build, Self::Api];

  /// Returns the canonical lowercase group name.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Build => "build",
      Self::Api => "api",
    }
  }
}

impl fmt::Display for VerboseCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when parsing a [`VerboseCategory`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
  input: String,
}

impl ParseCategoryError {
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

impl fmt::Display for ParseCategoryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown verbosity group `{}`", self.input)
  }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for VerboseCategory {
  type Err = ParseCategoryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_ascii_lowercase();
    Self::ALL
      .into_iter()
      .find(|category| category.as_str() == normalized)
      .ok_or_else(|| ParseCategoryError::new(s))
  }
}

/// Which verbose categories pass the filter.
///
/// Computed once from the configuration string when a logger is built and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbosityConfig {
  AllEnabled,
  AllDisabled,
  Categories(Vec<VerboseCategory>),
}

impl VerbosityConfig {
  /// Parse a verbosity configuration string.
  ///
  /// An absent or empty string, `true` and `all` enable every group;
  /// `false` disables them all (each compared case-insensitively).
  /// Anything else is a comma-separated group list. Tokens that name no
  /// known group are returned alongside the config, and their presence
  /// fails the whole configuration closed: one typo and nothing verbose
  /// is emitted, rather than silently over-enabling.
  #[must_use]
  pub fn parse(raw: Option<&str>) -> (Self, Vec<String>) {
    let Some(raw) = raw else {
      return (Self::AllEnabled, Vec::new());
    };
    let trimmed = raw.trim();

    if trimmed.is_empty()
      || trimmed.eq_ignore_ascii_case("true")
      || trimmed.eq_ignore_ascii_case("all")
    {
      return (Self::AllEnabled, Vec::new());
    }
    if trimmed.eq_ignore_ascii_case("false") {
      return (Self::AllDisabled, Vec::new());
    }

    let mut categories = Vec::new();
    let mut unknown = Vec::new();
    for candidate in trimmed.split(',') {
      let candidate = candidate.trim();
      match candidate.parse::<VerboseCategory>() {
        Ok(category) => {
          if !categories.contains(&category) {
            categories.push(category);
          }
        }
        Err(_) => unknown.push(candidate.to_owned()),
      }
    }

    if unknown.is_empty() {
      (Self::Categories(categories), unknown)
    } else {
      (Self::AllDisabled, unknown)
    }
  }

  /// Whether a verbose call in `category` should be emitted.
  #[must_use]
  pub fn is_enabled(&self, category: VerboseCategory) -> bool {
    match self {
      Self::AllEnabled => true,
      Self::AllDisabled => false,
      Self::Categories(categories) => categories.contains(&category),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent_and_empty_enable_everything() {
    for raw in [None, Some(""), Some("  ")] {
      let (config, unknown) = VerbosityConfig::parse(raw);
      assert_eq!(config, VerbosityConfig::AllEnabled);
      assert!(unknown.is_empty());
    }
  }

  #[test]
  fn keywords_are_case_insensitive() {
    for raw in ["true", "TRUE", "all", "All"] {
      let (config, _) = VerbosityConfig::parse(Some(raw));
      assert_eq!(config, VerbosityConfig::AllEnabled, "raw: {raw}");
    }
    let (config, _) = VerbosityConfig::parse(Some("False"));
    assert_eq!(config, VerbosityConfig::AllDisabled);
  }

  #[test]
  fn group_lists_trim_and_deduplicate() {
    let (config, unknown) =
      VerbosityConfig::parse(Some(" build , api, build"));
    assert_eq!(
      config,
      VerbosityConfig::Categories(vec![
        VerboseCategory::Build,
        VerboseCategory::Api,
      ])
    );
    assert!(unknown.is_empty());
    assert!(config.is_enabled(VerboseCategory::Build));
    assert!(config.is_enabled(VerboseCategory::Api));
  }

  #[test]
  fn one_bad_token_fails_the_whole_config_closed() {
    let (config, unknown) = VerbosityConfig::parse(Some("build,bla"));
    assert_eq!(config, VerbosityConfig::AllDisabled);
    assert_eq!(unknown, vec!["bla".to_owned()]);
    assert!(!config.is_enabled(VerboseCategory::Build));
  }

  #[test]
  fn empty_list_entries_count_as_unknown() {
    let (config, unknown) = VerbosityConfig::parse(Some("build,,api"));
    assert_eq!(config, VerbosityConfig::AllDisabled);
    assert_eq!(unknown, vec![String::new()]);
  }

  #[test]
  fn selected_groups_gate_membership() {
    let (config, _) = VerbosityConfig::parse(Some("api"));
    assert!(config.is_enabled(VerboseCategory::Api));
    assert!(!config.is_enabled(VerboseCategory::Build));
  }

  #[test]
  fn category_parse_accepts_any_case() {
    assert_eq!("BUILD".parse(), Ok(VerboseCategory::Build));
    assert_eq!(" api ".parse(), Ok(VerboseCategory::Api));
    let err = "bla".parse::<VerboseCategory>().unwrap_err();
    assert_eq!(err.input(), "bla");
    assert_eq!(err.to_string(), "unknown verbosity group `bla`");
  }
}
