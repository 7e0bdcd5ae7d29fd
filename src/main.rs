//! Chromakit - Command-line tool for describing colors and generating palettes

use std::process::ExitCode;

use chromakit::cli;

fn main() -> ExitCode {
    cli::run()
}
