use crate::color::{self, COLOR_EMPHASIS, ColorSpec};

/// A run of message text with the color its region resolved to.
///
/// `color` is `None` for text outside any region and for regions opened
/// with the colorless `/` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
  pub color: Option<ColorSpec>,
  pub text: String,
}

/// Byte length of a complete `[[x]]` marker.
const MARKER_LEN: usize = 5;

/// Scan state while walking a message left to right.
enum Region {
  Closed,
  Open(Option<ColorSpec>),
}

/// Split a formatted message into color-annotated segments.
///
/// Markers toggle a single region on and off. An opening marker selects
/// the region color; a closing marker ends whatever region is open, no
/// matter which character it carries. Text after an unclosed marker keeps
/// that region's color through the end of the message. The result is
/// normalized: no empty segments, no two neighbours with the same color.
#[must_use]
pub fn parse(message: &str) -> Vec<Segment> {
  let mut segments = Vec::new();
  let mut region = Region::Closed;
  let mut rest = message;

  while let Some((start, marker)) = next_marker(rest) {
    let text = rest[..start].to_owned();
    region = match region {
      Region::Closed => {
        segments.push(Segment { color: None, text });
        Region::Open(region_color(marker))
      }
      Region::Open(color) => {
        segments.push(Segment { color, text });
        Region::Closed
      }
    };
    rest = &rest[start + MARKER_LEN..];
  }

  let trailing_color = match region {
    Region::Closed => None,
    Region::Open(color) => color,
  };
  segments.push(Segment {
    color: trailing_color,
    text: rest.to_owned(),
  });

  coalesce(segments)
}

/// Drop empty segments and merge neighbours that share a color.
///
/// Running this over an already-normalized sequence changes nothing.
#[must_use]
pub fn coalesce(segments: Vec<Segment>) -> Vec<Segment> {
  let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
  for segment in segments {
    if segment.text.is_empty() {
      continue;
    }
    match merged.last_mut() {
      Some(last) if last.color == segment.color => {
        last.text.push_str(&segment.text);
      }
      _ => merged.push(segment),
    }
  }
  merged
}

/// Locate the next complete marker; returns its byte offset and character.
///
/// An incomplete delimiter (`[[` without a single marker character and
/// `]]`) is ordinary text and the scan continues one byte further, so
/// `[[[c]]` still finds the marker starting at the second bracket.
fn next_marker(text: &str) -> Option<(usize, char)> {
  let bytes = text.as_bytes();
  let mut index = 0;
  while index + MARKER_LEN <= bytes.len() {
    if bytes[index] == b'['
      && bytes[index + 1] == b'['
      && bytes[index + 3] == b']'
      && bytes[index + 4] == b']'
      && is_marker_char(bytes[index + 2])
    {
      return Some((index, bytes[index + 2] as char));
    }
    index += 1;
  }
  None
}

fn is_marker_char(byte: u8) -> bool {
  byte.is_ascii_alphabetic() || byte == b'*' || byte == b'/'
}

/// Resolve the color a marker opens a region with.
///
/// `/` opens a colorless region, `*` the emphasis color, and a letter its
/// table color with case selecting brightness. Letters without a table
/// entry highlight like `*`.
fn region_color(marker: char) -> Option<ColorSpec> {
  match marker {
    '/' => None,
    '*' => Some(COLOR_EMPHASIS),
    letter => Some(match color::for_letter(letter.to_ascii_lowercase()) {
      Some(base) => ColorSpec {
        base,
        bright: letter.is_ascii_lowercase(),
      },
      None => COLOR_EMPHASIS,
    }),
  }
}
