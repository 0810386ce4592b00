//! Entry point for the sysprops CLI.
use std::process::ExitCode;

use clap::Parser;
use sysprops::{
    cli::{self, CliArgs, RuntimeExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = CliArgs::parse();
    let output = cli::run(args).map_err(RuntimeExit::from_error)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
