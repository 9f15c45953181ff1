/// Utilities shared across the renderer and its CLI front-end.
///
/// `line` normalises raw input before it reaches the logger; `ansi` removes
/// escape sequences from already-rendered text, which the mirror file and
/// the round-trip tests rely on.
pub mod line {
  /// Sanitise a raw input line before it is rendered.
  ///
  /// The function trims trailing carriage-return (`\r`) and line-feed
  /// (`\n`) characters, then checks whether the remaining content is
  /// non-empty. An empty or whitespace-only input yields `None`,
  /// signalling that no line should be rendered.
  ///
  /// # Examples
  ///
  /// ```
  /// use emlog::util::line::sanitize;
  ///
  /// assert_eq!(sanitize("render me\n"), Some("render me".to_string()));
  /// assert_eq!(sanitize("\n\n"), None);
  /// ```
  #[must_use]
  pub fn sanitize(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(['\r', '\n']);
    if trimmed.trim().is_empty() {
      None
    } else {
      Some(trimmed.to_string())
    }
  }
}

pub mod ansi {
  /// Remove ANSI escape sequences from `text`, keeping the visible
  /// characters untouched.
  ///
  /// Handles CSI sequences (`ESC [` up to and including the final byte in
  /// `@`..`~`); a stray escape byte is dropped on its own.
  ///
  /// # Examples
  ///
  /// ```
  /// use emlog::util::ansi;
  ///
  /// assert_eq!(ansi::strip("\u{1b}[32mgreen\u{1b}[0m"), "green");
  /// assert_eq!(ansi::strip("no escapes"), "no escapes");
  /// ```
  #[must_use]
  pub fn strip(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
      if ch != '\u{1b}' {
        stripped.push(ch);
        continue;
      }
      if chars.clone().next() == Some('[') {
        chars.next();
        for follow in chars.by_ref() {
          if matches!(follow, '@'..='~') {
            break;
          }
        }
      }
    }
    stripped
  }
}

#[cfg(test)]
mod tests {
  use super::ansi::strip;
  use super::line::sanitize;

  #[test]
  fn sanitize_removes_trailing_newlines() {
    assert_eq!(sanitize("render me\n"), Some("render me".to_string()));
    assert_eq!(sanitize("render me\r\n"), Some("render me".to_string()));
    assert_eq!(sanitize("render me\r\n\n"), Some("render me".to_string()));
  }

  #[test]
  fn sanitize_rejects_blank_input() {
    assert_eq!(sanitize("   \n"), None);
    assert_eq!(sanitize("\n\n"), None);
  }

  #[test]
  fn strip_removes_multi_parameter_sequences() {
    assert_eq!(strip("\u{1b}[1;96mbold bright\u{1b}[0m"), "bold bright");
  }

  #[test]
  fn strip_drops_a_stray_escape_byte() {
    assert_eq!(strip("odd\u{1b}tail"), "oddtail");
  }

  #[test]
  fn strip_preserves_multibyte_text() {
    assert_eq!(strip("\u{1b}[36m⇢ wörld\u{1b}[0m"), "⇢ wörld");
  }
}
