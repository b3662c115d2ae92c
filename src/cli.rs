use clap::{ArgAction, Parser};
use log::LevelFilter;
use mathtest::Vec2;

use crate::host::Inputs;

/// Call into the mathtest static library and print the results
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(version)]
pub struct Cli {
  /// Value of the `ExampleStaticStruct` passed to `useCLib`
  #[arg(long, default_value_t = 3, allow_hyphen_values = true)]
  pub value: i32,

  /// Left operand of `Vec2_add`, as `x,y`
  #[arg(long, default_value = "2,1", allow_hyphen_values = true)]
  pub lhs: Vec2,

  /// Right operand of `Vec2_add`, as `x,y`
  #[arg(long, default_value = "0,1", allow_hyphen_values = true)]
  pub rhs: Vec2,

  /// Log more; repeat for more detail
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

impl Cli {
  pub fn inputs(&self) -> Inputs {
    Inputs {
      value: self.value,
      lhs: self.lhs,
      rhs: self.rhs,
    }
  }

  pub fn log_level(&self) -> LevelFilter {
    match self.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    }
  }
}
