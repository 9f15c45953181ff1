use tracing_subscriber::EnvFilter;

/// Initialise diagnostic logging for the emlog CLI.
///
/// Diagnostics go to stderr so they never interleave with rendered lines
/// on stdout. `debug` raises the default filter from WARN to DEBUG;
/// `use_color` controls ANSI codes in the diagnostic output.
pub fn init(debug: bool, use_color: bool) {
  let level = if debug {
    tracing::Level::DEBUG
  } else {
    tracing::Level::WARN
  };

  // Respect `RUST_LOG` style environment overrides, falling back to the
  // computed base level.
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_level(true)
    .with_ansi(use_color)
    .with_writer(std::io::stderr)
    .compact()
    .init();
}
