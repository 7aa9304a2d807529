//! CLI command handlers.
//!
//! Each handler has a fallible core returning [`SortResult`] and a thin
//! wrapper that prints and maps the outcome to an exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::debug;

use crate::algorithms::Algorithm;
use crate::config::VisualizerConfig;
use crate::data::{self, Pattern};
use crate::engine::{run, CancellationToken, Pause, RunOutcome, StepSink};
use crate::error::{SortError, SortResult};
use crate::visualization::EventStream;

use super::args::RunOptions;
use super::output::{
    print_algorithm_info, print_algorithm_list, print_help, print_run_result, print_version,
};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(options) => run_sort(&options),
        Command::Trace {
            algorithm,
            values,
            with_pacing,
        } => trace(&algorithm, &values, with_pacing),
        Command::Info { algorithm } => info(&algorithm),
        Command::List => {
            print_algorithm_list();
            ExitCode::SUCCESS
        }
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

fn fail(error: &SortError) -> ExitCode {
    eprintln!("Error: {error}");
    if error.is_user_error() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

// ============================================================================
// run
// ============================================================================

/// Resolve the effective configuration for `run`.
///
/// Precedence: command-line flags, then the config file, then defaults.
///
/// # Errors
///
/// Returns error if the config file cannot be loaded, a flag value does not
/// parse, or the resulting configuration fails validation.
pub fn resolve_config(options: &RunOptions) -> SortResult<VisualizerConfig> {
    let mut config = match &options.config_path {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };

    if let Some(algorithm) = &options.algorithm {
        config.algorithm.clone_from(algorithm);
    }
    if let Some(size) = &options.size {
        config.size = size
            .parse()
            .map_err(|e| SortError::invalid_value(size, format!("size: {e}")))?;
    }
    if let Some(pattern) = &options.pattern {
        config.pattern = pattern.parse::<Pattern>()?;
    }
    if let Some(seed) = &options.seed {
        config.seed = seed
            .parse()
            .map_err(|e| SortError::invalid_value(seed, format!("seed: {e}")))?;
    }

    config.check()?;
    Ok(config)
}

/// Prints narration to stdout when verbose; never pauses.
struct ConsoleSink {
    verbose: bool,
}

impl<T> StepSink<T> for ConsoleSink {
    fn report_comparison(&mut self, _indices: &[usize]) {}
    fn report_swap(&mut self, _indices: &[usize]) {}
    fn report_pivot(&mut self, _indices: &[usize]) {}
    fn report_sorted(&mut self, _indices: &[usize]) {}
    fn report_array_state(&mut self, _values: &[T]) {}

    fn report_description(&mut self, text: &str) {
        if self.verbose {
            println!("  {text}");
        }
    }

    fn pace(&mut self, _pause: Pause) {}
}

/// Generate the configured array and sort it headlessly.
///
/// # Errors
///
/// Returns error if the configuration cannot be resolved.
pub fn execute_run(
    options: &RunOptions,
) -> SortResult<(VisualizerConfig, Vec<u32>, RunOutcome<u32>)> {
    let config = resolve_config(options)?;
    let algorithm = config.resolved_algorithm()?;
    let input = config.generate();
    debug!(algorithm = %algorithm, size = input.len(), seed = config.seed, "cli run");

    let mut sink = ConsoleSink {
        verbose: options.verbose,
    };
    let outcome = run(algorithm, input.clone(), &mut sink, &CancellationToken::new());
    Ok((config, input, outcome))
}

/// Handle `run`.
#[must_use]
pub fn run_sort(options: &RunOptions) -> ExitCode {
    match execute_run(options) {
        Ok((config, input, outcome)) => {
            print_run_result(&config, &input, &outcome);
            if outcome.completed && data::is_sorted(&outcome.values) {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => fail(&e),
    }
}

// ============================================================================
// trace
// ============================================================================

/// Parse raw trace values.
///
/// # Errors
///
/// Returns [`SortError::InvalidValue`] for the first value that is not a
/// non-negative integer.
pub fn parse_values(raw: &[String]) -> SortResult<Vec<u32>> {
    raw.iter()
        .map(|value| {
            value
                .parse()
                .map_err(|e| SortError::invalid_value(value, format!("array value: {e}")))
        })
        .collect()
}

/// Sort `values` with `algorithm`, writing every event as JSON Lines.
///
/// # Errors
///
/// Returns error if the algorithm or a value does not parse, or writing fails.
pub fn execute_trace<W: Write>(
    algorithm: &str,
    values: &[String],
    with_pacing: bool,
    writer: W,
) -> SortResult<RunOutcome<u32>> {
    let algorithm: Algorithm = algorithm.parse()?;
    let values = parse_values(values)?;

    let mut stream = EventStream::new(writer).with_pacing(with_pacing);
    let outcome = run(algorithm, values, &mut stream, &CancellationToken::new());
    let written = stream.finish()?;
    debug!(events = written, "trace written");
    Ok(outcome)
}

/// Handle `trace`.
#[must_use]
pub fn trace(algorithm: &str, values: &[String], with_pacing: bool) -> ExitCode {
    let stdout = io::stdout();
    match execute_trace(algorithm, values, with_pacing, stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

// ============================================================================
// info
// ============================================================================

/// Handle `info`.
#[must_use]
pub fn info(name: &str) -> ExitCode {
    match name.parse::<Algorithm>() {
        Ok(algorithm) => {
            print_algorithm_info(algorithm);
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}
