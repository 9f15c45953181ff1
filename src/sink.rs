use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::util::ansi;

/// Destination for rendered log lines.
///
/// Implementations own the actual byte writing; the logger only borrows a
/// sink for the duration of a single call and keeps no reference to it.
pub trait Sink {
  fn write_debug(&mut self, line: &str);
  fn write_info(&mut self, line: &str);
  fn write_warn(&mut self, line: &str);
  fn write_error(&mut self, line: &str);

  /// Whether the host is currently producing its own debug-formatted
  /// output. Color is suppressed on every channel while this reports true,
  /// since escape codes would corrupt that output.
  fn is_debug_mode_active(&self) -> bool;
}

/// Sink writing info lines to stdout and everything else to stderr.
///
/// Debug lines are only written while the sink is in debug mode. When
/// constructed with a mirror path, every emitted line is also appended to
/// that file with ANSI escapes stripped, so the file stays readable
/// regardless of the console color decision.
pub struct ConsoleSink {
  debug_mode: bool,
  mirror: Option<File>,
}

impl ConsoleSink {
  #[must_use]
  pub fn new(debug_mode: bool) -> Self {
    Self {
      debug_mode,
      mirror: None,
    }
  }

  /// Attach a mirror file. An existing file at `path` is truncated, so
  /// every run starts from an empty mirror.
  pub fn with_mirror(debug_mode: bool, path: &Path) -> Result<Self> {
    let mirror = File::create(path).with_context(|| {
      format!("failed to create mirror file {}", path.display())
    })?;
    Ok(Self {
      debug_mode,
      mirror: Some(mirror),
    })
  }

  fn mirror_line(&mut self, line: &str) {
    let Some(file) = self.mirror.as_mut() else {
      return;
    };
    if let Err(err) = writeln!(file, "{}", ansi::strip(line)) {
      tracing::warn!(error = %err, "mirror write failed; mirror disabled");
      self.mirror = None;
    }
  }
}

impl Sink for ConsoleSink {
  fn write_debug(&mut self, line: &str) {
    if self.debug_mode {
      eprintln!("{line}");
      self.mirror_line(line);
    }
  }

  fn write_info(&mut self, line: &str) {
    println!("{line}");
    self.mirror_line(line);
  }

  fn write_warn(&mut self, line: &str) {
    eprintln!("{line}");
    self.mirror_line(line);
  }

  fn write_error(&mut self, line: &str) {
    eprintln!("{line}");
    self.mirror_line(line);
  }

  fn is_debug_mode_active(&self) -> bool {
    self.debug_mode
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::color::COLOR_INFO;
  use crate::render::RESET;
  use std::path::PathBuf;

  fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("emlog-{}-{name}", std::process::id()))
  }

  #[test]
  fn mirror_receives_stripped_lines() {
    let path = scratch_path("mirror.log");
    {
      let mut sink =
        ConsoleSink::with_mirror(false, &path).expect("create mirror");
      sink.write_info(&format!("{}hello{RESET}", COLOR_INFO.ansi_fg()));
      sink.write_warn("plain warning");
    }
    let contents = std::fs::read_to_string(&path).expect("read mirror");
    std::fs::remove_file(&path).ok();
    assert_eq!(contents, "hello\nplain warning\n");
  }

  #[test]
  fn debug_lines_are_gated_by_debug_mode() {
    let path = scratch_path("gated.log");
    {
      let mut sink =
        ConsoleSink::with_mirror(false, &path).expect("create mirror");
      sink.write_debug("invisible");
    }
    let contents = std::fs::read_to_string(&path).expect("read mirror");
    std::fs::remove_file(&path).ok();
    assert!(contents.is_empty());

    let mut sink = ConsoleSink::new(true);
    assert!(sink.is_debug_mode_active());
    sink.write_debug("visible on stderr");
  }

  #[test]
  fn existing_mirror_is_truncated() {
    let path = scratch_path("truncate.log");
    std::fs::write(&path, "stale content\n").expect("seed file");
    {
      let mut sink =
        ConsoleSink::with_mirror(false, &path).expect("create mirror");
      sink.write_error("fresh");
    }
    let contents = std::fs::read_to_string(&path).expect("read mirror");
    std::fs::remove_file(&path).ok();
    assert_eq!(contents, "fresh\n");
  }
}
