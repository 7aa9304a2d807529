//! CLI output formatting.
//!
//! Formatting is split into `format_*` functions returning strings (tested)
//! and `print_*` wrappers writing them to stdout.

use std::fmt::Write as _;

use crate::algorithms::{Algorithm, Implementation};
use crate::config::VisualizerConfig;
use crate::engine::RunOutcome;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Arrays up to this length are printed in full.
const SHOW_VALUES_LIMIT: usize = 20;

/// Print version information.
pub fn print_version() {
    println!("{}", format_version());
}

/// Version line, with the git revision when built from a checkout.
#[must_use]
pub fn format_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("SORTVIZ_GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("sortviz {version} ({hash})"),
        _ => format!("sortviz {version}"),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"sortviz - Step-by-step sorting algorithm visualizer

USAGE:
    sortviz <COMMAND> [OPTIONS]

COMMANDS:
    run [algorithm]             Sort a generated array and print statistics
        -n, --size <N>          Number of elements (1-500, default: 50)
        -p, --pattern <P>       random, sorted, reverse, nearly, duplicates
        --seed <N>              Seed for data generation (default: 42)
        -c, --config <file>     Load settings from a YAML file
        -v, --verbose           Print every step description

    trace <algorithm> <values>  Sort the given values, emitting JSON Lines
        --with-pacing           Include pacing requests in the stream

    info <algorithm>            Show complexity, properties and pseudocode

    list                        List every selectable algorithm

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    sortviz run quick --size 20 --pattern reverse
    sortviz run --config sortviz.yaml -v
    sortviz trace merge 5 3 8 1
    sortviz info heap

The interactive terminal visualizer is available as `sort-tui`.
Set RUST_LOG=sortviz=debug for diagnostic output on stderr.
"
    );
}

fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the result of a `run`.
#[must_use]
pub fn format_run_result(
    config: &VisualizerConfig,
    input: &[u32],
    outcome: &RunOutcome<u32>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Algorithm: {}", outcome.algorithm.name());
    if let Implementation::Fallback { substitute, .. } = outcome.algorithm.implementation() {
        let _ = writeln!(out, "Executed:  {} (placeholder fallback)", substitute.name());
    }
    let _ = writeln!(out, "Pattern:   {}", config.pattern.label());
    let _ = writeln!(out, "Size:      {}", input.len());
    let _ = writeln!(out, "Seed:      {}", config.seed);
    let _ = writeln!(out, "{RULE}\n");

    if input.len() <= SHOW_VALUES_LIMIT {
        let _ = writeln!(out, "Input:  [{}]", join_values(input));
        let _ = writeln!(out, "Output: [{}]\n", join_values(&outcome.values));
    }

    let _ = writeln!(out, "Statistics:");
    let _ = writeln!(out, "  Comparisons:  {}", outcome.stats.comparisons);
    let _ = writeln!(out, "  Swaps:        {}", outcome.stats.swaps);
    let _ = writeln!(out, "  Array states: {}", outcome.stats.accesses);
    let _ = writeln!(out, "  Elapsed:      {}", outcome.stats.elapsed_display());

    let (sym, status) = if outcome.completed {
        ("✓", "SORTED")
    } else {
        ("✗", "STOPPED")
    };
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "{sym} Result: {status}");
    let _ = writeln!(out, "{RULE}");
    out
}

/// Print the result of a `run`.
pub fn print_run_result(config: &VisualizerConfig, input: &[u32], outcome: &RunOutcome<u32>) {
    print!("{}", format_run_result(config, input, outcome));
}

/// Format the reference card for `algorithm`.
#[must_use]
pub fn format_algorithm_info(algorithm: Algorithm) -> String {
    let info = algorithm.info();
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", algorithm.name());
    let _ = writeln!(out, "{RULE}\n");

    if let Implementation::Fallback { substitute, .. } = algorithm.implementation() {
        let _ = writeln!(
            out,
            "Not implemented yet; running it falls back to {}.\n",
            substitute.name()
        );
    }

    let _ = writeln!(out, "Time complexity:  {}", info.time_complexity);
    let _ = writeln!(out, "Space complexity: {}", info.space_complexity);
    let _ = writeln!(out, "Stable:           {}", info.stable);
    let _ = writeln!(out, "In place:         {}", info.in_place);
    let _ = writeln!(out, "\n{}\n", info.description);
    let _ = writeln!(out, "Pseudocode:");
    for line in info.pseudocode.lines() {
        let _ = writeln!(out, "    {line}");
    }
    out
}

/// Print the reference card for `algorithm`.
pub fn print_algorithm_info(algorithm: Algorithm) {
    print!("{}", format_algorithm_info(algorithm));
}

/// Format the algorithm menu.
#[must_use]
pub fn format_algorithm_list() -> String {
    let mut out = String::from("Available algorithms:\n\n");
    for algorithm in Algorithm::ALL {
        let note = match algorithm.implementation() {
            Implementation::Native(_) => String::new(),
            Implementation::Fallback { substitute, .. } => {
                format!("  (placeholder, runs {substitute})")
            }
        };
        let _ = writeln!(out, "  {:<10} {:<15}{note}", algorithm.id(), algorithm.name());
    }
    out
}

/// Print the algorithm menu.
pub fn print_algorithm_list() {
    print!("{}", format_algorithm_list());
}
