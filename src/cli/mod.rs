//! CLI module for sortviz.
//!
//! This module contains all CLI logic so that it can be tested without
//! spawning the binary. The entry point `run_cli` is called from main.rs
//! with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{execute_run, execute_trace, parse_values, resolve_config, run_cli};
pub use output::{
    format_algorithm_info, format_algorithm_list, format_run_result, format_version,
    print_algorithm_info, print_algorithm_list, print_help, print_run_result, print_version,
};
