use std::path::PathBuf;

use clap::Parser;

use crate::level::Level;
use crate::verbosity::VerboseCategory;

/// Command-line arguments for the emlog renderer.
#[derive(Parser, Debug, Clone)]
#[command(
  author,
  version,
  about = "Render emphasis-markup log lines with ANSI colors",
  trailing_var_arg = true
)]
pub struct Cli {
  /// Prefix prepended to every rendered line.
  #[arg(long, env = "EMLOG_PREFIX", default_value = "")]
  pub prefix: String,

  /// Verbosity group configuration: `true`, `false`, `all`, or a
  /// comma-separated list of group names.
  #[arg(long, env = "EMLOG_VERBOSE", value_name = "SPEC")]
  pub verbose: Option<String>,

  /// Level to render messages at.
  #[arg(long, default_value_t = Level::Info)]
  pub level: Level,

  /// Route messages through the verbose filter under this group instead
  /// of emitting them directly.
  #[arg(long, value_name = "GROUP")]
  pub category: Option<VerboseCategory>,

  /// Disable ANSI color output.
  #[arg(long)]
  pub plain: bool,

  /// Report the host as debug-mode: debug lines are written and color is
  /// suppressed on every channel.
  #[arg(long)]
  pub debug: bool,

  /// Mirror every rendered line, stripped of escapes, into this file.
  #[arg(long, value_name = "PATH")]
  pub output_file: Option<PathBuf>,

  /// Message to render; lines are read from stdin when omitted.
  #[arg(value_name = "MESSAGE")]
  pub message: Vec<String>,
}
