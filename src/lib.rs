pub mod cli;
pub mod color;
pub mod core;
pub mod level;
pub mod logger;
pub mod logging;
pub mod markup;
pub mod render;
pub mod runtime;
pub mod sink;
pub mod util;
pub mod verbosity;

pub use cli::Cli;
pub use color::{
  BaseColor, COLOR_EMPHASIS, COLOR_ERROR, COLOR_INFO, COLOR_WARNING,
  ColorSpec,
};
pub use core::run;
pub use level::Level;
pub use logger::Logger;
pub use markup::{Segment, coalesce, parse};
pub use render::{RESET, render};
pub use runtime::Runtime;
pub use sink::{ConsoleSink, Sink};
pub use verbosity::{VerboseCategory, VerbosityConfig};
