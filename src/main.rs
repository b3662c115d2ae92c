mod cli;
mod error;
mod ffi;
mod host;

use std::{
  io::{self, Write},
  process::ExitCode,
};

use clap::Parser;

use cli::Cli;
use ffi::{Linked, StaticLib};
use host::Inputs;

fn main() -> ExitCode {
  let cli = Cli::parse();

  env_logger::Builder::new()
    .filter_level(cli.log_level())
    .parse_default_env()
    .init();

  ExitCode::from(report(
    &Linked,
    cli.inputs(),
    &mut io::stdout(),
    &mut io::stderr(),
  ))
}

/// Runs the host and writes the report or error. Returns the exit status.
fn report<L: StaticLib + ?Sized>(
  lib: &L,
  inputs: Inputs,
  out: &mut impl Write,
  err: &mut impl Write,
) -> u8 {
  match host::run(lib, inputs) {
    Ok(report) => {
      let _ = writeln!(out, "{}", report);
      0
    }
    Err(e) => {
      let _ = writeln!(err, "error: {}", e);
      1
    }
  }
}
