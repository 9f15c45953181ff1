use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result};

use crate::{
  cli::Cli,
  logger::Logger,
  logging,
  sink::ConsoleSink,
  util::line,
};

/// Orchestrate a full render run for a single invocation.
pub fn run(cli: Cli) -> Result<i32> {
  let use_color_stdout = !cli.plain && io::stdout().is_terminal();
  let use_color_logs = !cli.plain && io::stderr().is_terminal();

  logging::init(cli.debug, use_color_logs);

  let mut sink = match cli.output_file.as_deref() {
    Some(path) => ConsoleSink::with_mirror(cli.debug, path)?,
    None => ConsoleSink::new(cli.debug),
  };

  let logger = Logger::new(
    &mut sink,
    use_color_stdout,
    cli.verbose.as_deref(),
    cli.prefix.clone(),
  );
  tracing::debug!(
    color = use_color_stdout,
    level = %cli.level,
    verbosity = ?logger.verbosity(),
    "renderer initialised"
  );

  if cli.message.is_empty() {
    run_stream(&cli, &logger, &mut sink)
  } else {
    run_one_shot(&cli, &logger, &mut sink);
    Ok(0)
  }
}

fn emit(cli: &Cli, logger: &Logger, sink: &mut ConsoleSink, message: &str) {
  match cli.category {
    Some(category) => {
      logger.verbose(sink, category, format_args!("{message}"));
    }
    None => logger.log(sink, cli.level, format_args!("{message}")),
  }
}

fn run_one_shot(cli: &Cli, logger: &Logger, sink: &mut ConsoleSink) {
  let message = cli.message.join(" ");
  emit(cli, logger, sink, &message);
}

fn run_stream(
  cli: &Cli,
  logger: &Logger,
  sink: &mut ConsoleSink,
) -> Result<i32> {
  let stdin = io::stdin();
  for raw in stdin.lock().lines() {
    let raw = raw.context("failed to read line from stdin")?;
    let Some(message) = line::sanitize(&raw) else {
      continue;
    };
    emit(cli, logger, sink, &message);
  }

  tracing::debug!("stdin closed; render stream complete");
  Ok(0)
}
