use owo_colors::Color as _;
use owo_colors::colors;

/// The eight base terminal colors addressable from markup letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseColor {
  Black,
  Red,
  Green,
  Yellow,
  Blue,
  Magenta,
  Cyan,
  White,
}

/// A concrete foreground color: a base identity plus a brightness flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSpec {
  pub base: BaseColor,
  pub bright: bool,
}

/// Base color for rendered info lines.
pub const COLOR_INFO: ColorSpec = ColorSpec::normal(BaseColor::Green);
/// Base color for rendered warning lines.
pub const COLOR_WARNING: ColorSpec = ColorSpec::normal(BaseColor::Yellow);
/// Base color for rendered error lines.
pub const COLOR_ERROR: ColorSpec = ColorSpec::normal(BaseColor::Red);
/// Color bound to the `*` emphasis marker. Always bright.
pub const COLOR_EMPHASIS: ColorSpec = ColorSpec::bright(BaseColor::Blue);

impl ColorSpec {
  /// A normal-intensity variant of `base`.
  #[must_use]
  pub const fn normal(base: BaseColor) -> Self {
    Self {
      base,
      bright: false,
    }
  }

  /// A bright variant of `base`.
  #[must_use]
  pub const fn bright(base: BaseColor) -> Self {
    Self { base, bright: true }
  }

  /// The ANSI foreground escape that activates this color.
  #[must_use]
  pub fn ansi_fg(self) -> &'static str {
    match (self.base, self.bright) {
      (BaseColor::Black, false) => colors::Black::ANSI_FG,
      (BaseColor::Red, false) => colors::Red::ANSI_FG,
      (BaseColor::Green, false) => colors::Green::ANSI_FG,
      (BaseColor::Yellow, false) => colors::Yellow::ANSI_FG,
      (BaseColor::Blue, false) => colors::Blue::ANSI_FG,
      (BaseColor::Magenta, false) => colors::Magenta::ANSI_FG,
      (BaseColor::Cyan, false) => colors::Cyan::ANSI_FG,
      (BaseColor::White, false) => colors::White::ANSI_FG,
      (BaseColor::Black, true) => colors::BrightBlack::ANSI_FG,
      (BaseColor::Red, true) => colors::BrightRed::ANSI_FG,
      (BaseColor::Green, true) => colors::BrightGreen::ANSI_FG,
      (BaseColor::Yellow, true) => colors::BrightYellow::ANSI_FG,
      (BaseColor::Blue, true) => colors::BrightBlue::ANSI_FG,
      (BaseColor::Magenta, true) => colors::BrightMagenta::ANSI_FG,
      (BaseColor::Cyan, true) => colors::BrightCyan::ANSI_FG,
      (BaseColor::White, true) => colors::BrightWhite::ANSI_FG,
    }
  }
}

/// Look up the base color bound to a lowercase marker letter.
///
/// The table binds exactly one letter per color; `k` stands in for black
/// since `b` belongs to blue. Letters outside the table return `None` and
/// the caller decides the fallback.
#[must_use]
pub const fn for_letter(letter: char) -> Option<BaseColor> {
  match letter {
    'b' => Some(BaseColor::Blue),
    'c' => Some(BaseColor::Cyan),
    'g' => Some(BaseColor::Green),
    'k' => Some(BaseColor::Black),
    'm' => Some(BaseColor::Magenta),
    'r' => Some(BaseColor::Red),
    'w' => Some(BaseColor::White),
    'y' => Some(BaseColor::Yellow),
    _ => None,
  }
}
