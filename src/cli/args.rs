//! CLI argument parsing.
//!
//! This module provides the argument parser for the sortviz CLI.
//! Values are kept as raw strings here and resolved by the command handlers,
//! so parsing itself never fails.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Options for the `run` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Algorithm name; falls back to the config file, then `bubble`.
    pub algorithm: Option<String>,
    /// Array size override.
    pub size: Option<String>,
    /// Data pattern override.
    pub pattern: Option<String>,
    /// Seed override.
    pub seed: Option<String>,
    /// YAML configuration file.
    pub config_path: Option<PathBuf>,
    /// Print every step description.
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sort a generated array and print the statistics
    Run(RunOptions),
    /// Sort the given values and stream every event as JSON Lines
    Trace {
        /// Algorithm name.
        algorithm: String,
        /// Raw input values.
        values: Vec<String>,
        /// Also emit pacing requests.
        with_pacing: bool,
    },
    /// Show complexity, properties and pseudocode of an algorithm
    Info {
        /// Algorithm name.
        algorithm: String,
    },
    /// List every selectable algorithm
    List,
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "trace" => Self::parse_trace_command(args),
            "info" => Self::parse_info_command(args),
            "list" => Command::List,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(args: &[String]) -> Command {
        let mut options = RunOptions::default();

        let mut i = 2;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = args.get(i + 1).cloned();
            match flag {
                "--size" | "-n" => {
                    options.size = value;
                    i += 2;
                }
                "--pattern" | "-p" => {
                    options.pattern = value;
                    i += 2;
                }
                "--seed" => {
                    options.seed = value;
                    i += 2;
                }
                "--config" | "-c" => {
                    options.config_path = value.map(PathBuf::from);
                    i += 2;
                }
                "-v" | "--verbose" => {
                    options.verbose = true;
                    i += 1;
                }
                positional if !positional.starts_with('-') && options.algorithm.is_none() => {
                    options.algorithm = Some(positional.to_string());
                    i += 1;
                }
                other => {
                    eprintln!("Warning: ignoring argument '{other}'");
                    i += 1;
                }
            }
        }

        Command::Run(options)
    }

    /// Parse the 'trace' command arguments.
    fn parse_trace_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'trace' command requires an algorithm");
            return Command::Help;
        }

        let mut with_pacing = false;
        let mut values = Vec::new();
        for arg in &args[3..] {
            if arg == "--with-pacing" {
                with_pacing = true;
            } else {
                values.extend(
                    arg.split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string),
                );
            }
        }

        Command::Trace {
            algorithm: args[2].clone(),
            values,
            with_pacing,
        }
    }

    /// Parse the 'info' command arguments.
    fn parse_info_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'info' command requires an algorithm");
            return Command::Help;
        }

        Command::Info {
            algorithm: args[2].clone(),
        }
    }
}
