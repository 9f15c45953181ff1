use clap::Parser;
use emlog::{Cli, Runtime};

fn main() {
  let cli = Cli::parse();
  let exit_code = Runtime::new(cli).execute();
  std::process::exit(exit_code);
}
