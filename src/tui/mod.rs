//! TUI module for sortviz.
//!
//! This module contains the application state and the background worker for
//! the `sort-tui` binary. Terminal I/O remains in the binary; all testable
//! state management lives here.

#[cfg(feature = "tui")]
pub mod sort_app;
pub mod worker;

#[cfg(feature = "tui")]
pub use sort_app::{RunStatus, SortApp};
pub use worker::{ChannelSink, SortWorker, WorkerMessage};

#[cfg(test)]
#[cfg(feature = "tui")]
mod tests;
