//! Tokgen - command-line tool for generating platform design token sources

use std::process::ExitCode;

use tokgen::cli;

fn main() -> ExitCode {
    cli::run()
}
