use crate::color::ColorSpec;
use crate::markup::Segment;

/// Escape that returns the terminal to its default attributes.
pub const RESET: &str = "\u{1b}[0m";

/// Assemble the final line from a normalized segment sequence.
///
/// With color inactive the markup is already gone from the segments, so
/// the line is simply the prefix followed by the raw texts. With color
/// active the line opens in `base`, switches color only when a segment
/// actually needs a different one, and ends with a single reset. Because
/// the parser never hands over empty segments, no escape is ever emitted
/// around an empty run.
#[must_use]
pub fn render(
  segments: &[Segment],
  prefix: &str,
  color_active: bool,
  base: ColorSpec,
) -> String {
  if !color_active {
    let mut line = String::with_capacity(prefix.len() + text_len(segments));
    line.push_str(prefix);
    for segment in segments {
      line.push_str(&segment.text);
    }
    return line;
  }

  let mut line = String::new();
  line.push_str(base.ansi_fg());
  line.push_str(prefix);

  let mut current = base;
  for segment in segments {
    let wanted = segment.color.unwrap_or(base);
    if wanted != current {
      line.push_str(wanted.ansi_fg());
      current = wanted;
    }
    line.push_str(&segment.text);
  }

  line.push_str(RESET);
  line
}

fn text_len(segments: &[Segment]) -> usize {
  segments.iter().map(|segment| segment.text.len()).sum()
}
