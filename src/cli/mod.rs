mod command;
mod runner;
mod util;

pub use command::Command;
pub use runner::{OutputMode, RunReport, StrategyTiming, run, run_with_format};
pub use util::{parse_output_mode, parse_sizes};
