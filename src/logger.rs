use std::fmt;

use crate::color::{COLOR_ERROR, COLOR_INFO, COLOR_WARNING, ColorSpec};
use crate::level::Level;
use crate::markup;
use crate::render;
use crate::sink::Sink;
use crate::verbosity::{VerboseCategory, VerbosityConfig};

/// Facade turning formatted messages into rendered lines on a sink.
///
/// A logger is a plain value: a line prefix, the color switch, and the
/// verbosity configuration parsed once at construction. Nothing else is
/// retained between calls, so a logger can be shared freely as long as
/// the sink itself tolerates concurrent writes.
///
/// None of the emitting methods can fail; malformed markup degrades to a
/// best-effort rendering instead of surfacing an error.
#[derive(Debug, Clone)]
pub struct Logger {
  prefix: String,
  color_enabled: bool,
  verbosity: VerbosityConfig,
}

impl Logger {
  /// Build a logger from its configuration surface.
  ///
  /// `verbose` is the raw verbosity string. Tokens naming unknown groups
  /// are reported through `sink`'s warn channel here, once per token, and
  /// leave the verbose filter fully closed.
  pub fn new<S: Sink + ?Sized>(
    sink: &mut S,
    color_enabled: bool,
    verbose: Option<&str>,
    prefix: impl Into<String>,
  ) -> Self {
    let (verbosity, unknown) = VerbosityConfig::parse(verbose);
    let logger = Self {
      prefix: prefix.into(),
      color_enabled,
      verbosity,
    };
    for token in &unknown {
      logger.warn(
        sink,
        format_args!("Unknown verbosity group {token}. Ignoring..."),
      );
    }
    logger
  }

  #[must_use]
  pub fn verbosity(&self) -> &VerbosityConfig {
    &self.verbosity
  }

  /// Write a debug line verbatim; markup is never interpreted here.
  ///
  /// Whether the line actually reaches the console is the sink's own
  /// debug gate, not a concern of the logger.
  pub fn debug<S: Sink + ?Sized>(
    &self,
    sink: &mut S,
    message: fmt::Arguments<'_>,
  ) {
    sink.write_debug(&format!("{}{}", self.prefix, message));
  }

  pub fn info<S: Sink + ?Sized>(
    &self,
    sink: &mut S,
    message: fmt::Arguments<'_>,
  ) {
    let line = self.render_line(sink, COLOR_INFO, message);
    sink.write_info(&line);
  }

  pub fn warn<S: Sink + ?Sized>(
    &self,
    sink: &mut S,
    message: fmt::Arguments<'_>,
  ) {
    let line = self.render_line(sink, COLOR_WARNING, message);
    sink.write_warn(&line);
  }

  pub fn error<S: Sink + ?Sized>(
    &self,
    sink: &mut S,
    message: fmt::Arguments<'_>,
  ) {
    let line = self.render_line(sink, COLOR_ERROR, message);
    sink.write_error(&line);
  }

  /// Emit with `info` semantics if `category` passes the verbose filter;
  /// otherwise nothing reaches the sink.
  pub fn verbose<S: Sink + ?Sized>(
    &self,
    sink: &mut S,
    category: VerboseCategory,
    message: fmt::Arguments<'_>,
  ) {
    if self.verbosity.is_enabled(category) {
      self.info(sink, message);
    }
  }

  /// Dispatch on a runtime-selected level.
  pub fn log<S: Sink + ?Sized>(
    &self,
    sink: &mut S,
    level: Level,
    message: fmt::Arguments<'_>,
  ) {
    match level {
      Level::Debug => self.debug(sink, message),
      Level::Info => self.info(sink, message),
      Level::Warn => self.warn(sink, message),
      Level::Error => self.error(sink, message),
    }
  }

  fn render_line<S: Sink + ?Sized>(
    &self,
    sink: &S,
    base: ColorSpec,
    message: fmt::Arguments<'_>,
  ) -> String {
    let text = message.to_string();
    let color_active = self.color_enabled && !sink.is_debug_mode_active();
    render::render(&markup::parse(&text), &self.prefix, color_active, base)
  }
}
