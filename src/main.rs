//! sortviz CLI - step-by-step sorting algorithm visualizer
//!
//! Command-line interface for headless runs, event traces and the algorithm
//! reference. The interactive visualizer is the `sort-tui` binary.

use std::process::ExitCode;

use sortviz::cli::{run_cli, Args};

fn main() -> ExitCode {
    sortviz::logging::init();
    run_cli(Args::parse())
}
