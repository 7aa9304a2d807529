//! Sorting visualizer TUI application state and logic.
//!
//! This module contains the testable state and logic for the `sort-tui`
//! binary. Terminal I/O is handled by the binary; the sort itself runs on a
//! [`SortWorker`] thread and its events are drained in [`SortApp::update`].

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::info;

use crate::algorithms::Algorithm;
use crate::catalog::AlgorithmInfo;
use crate::config::{VisualizerConfig, UI_MAX_SIZE, UI_MIN_SIZE};
use crate::data::{Pattern, SeededRng};
use crate::engine::{Pacing, Playback, RunStats, Speed};
use crate::error::SortResult;
use crate::visualization::BarChartState;

use super::worker::{SortWorker, WorkerMessage};

/// Size change per `[` / `]` press.
const SIZE_STEP: usize = 10;

/// Lifecycle of the current array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Array generated or reset; nothing running.
    Idle,
    /// Worker running.
    Running,
    /// Worker paused; `s` advances one pause point.
    Paused,
    /// Worker finished and the array is sorted.
    Finished,
    /// Worker stopped before finishing.
    Stopped,
}

impl RunStatus {
    /// Whether a worker is alive.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    /// Short label for the title bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "READY",
            Self::Running => "SORTING",
            Self::Paused => "PAUSED",
            Self::Finished => "DONE",
            Self::Stopped => "STOPPED",
        }
    }
}

/// Application state for the sorting visualizer.
pub struct SortApp {
    /// Selected algorithm.
    pub algorithm: Algorithm,
    /// Selected data pattern.
    pub pattern: Pattern,
    /// Number of elements generated.
    pub size: usize,
    /// Bars, highlights, narration and live counters.
    pub chart: BarChartState<u32>,
    /// Run status.
    pub status: RunStatus,
    /// Whether the app should quit.
    pub should_quit: bool,
    original: Vec<u32>,
    rng: SeededRng,
    pacing: Pacing,
    playback: Arc<Playback>,
    worker: Option<SortWorker>,
    generation: u64,
    tx: Sender<WorkerMessage>,
    rx: Receiver<WorkerMessage>,
    started: Option<Instant>,
    elapsed: Duration,
}

impl SortApp {
    /// Create an application from a configuration.
    ///
    /// The configured size is clamped into the interactive range.
    ///
    /// # Errors
    ///
    /// Returns error if the configured algorithm does not resolve.
    pub fn new(config: &VisualizerConfig) -> SortResult<Self> {
        let algorithm = config.resolved_algorithm()?;
        Ok(Self::build(algorithm, config))
    }

    /// Application with default settings.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::build(Algorithm::default(), &VisualizerConfig::default())
    }

    fn build(algorithm: Algorithm, config: &VisualizerConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut app = Self {
            algorithm,
            pattern: config.pattern,
            size: config.size.clamp(UI_MIN_SIZE, UI_MAX_SIZE),
            chart: BarChartState::new(Vec::new()),
            status: RunStatus::Idle,
            should_quit: false,
            original: Vec::new(),
            rng: SeededRng::new(config.seed),
            pacing: config.pacing(),
            playback: Arc::new(Playback::new(config.speed())),
            worker: None,
            generation: 0,
            tx,
            rx,
            started: None,
            elapsed: Duration::ZERO,
        };
        app.generate();
        app
    }

    /// Use different pause durations for later runs.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Reference card of the selected algorithm.
    #[must_use]
    pub fn info(&self) -> &'static AlgorithmInfo {
        self.algorithm.info()
    }

    /// Current speed.
    #[must_use]
    pub fn speed(&self) -> Speed {
        self.playback.speed()
    }

    /// Counters to display.
    #[must_use]
    pub const fn stats(&self) -> &RunStats {
        self.chart.stats()
    }

    /// Wall-clock time of the current or last run.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.map_or(self.elapsed, |started| started.elapsed())
    }

    /// The array as generated, before sorting.
    #[must_use]
    pub fn original(&self) -> &[u32] {
        &self.original
    }

    /// Generate a fresh array from the selected pattern.
    pub fn generate(&mut self) {
        if self.status.is_active() {
            return;
        }
        self.original = self.pattern.generate(self.size, &mut self.rng);
        self.chart.load(
            self.original.clone(),
            "Array generated. Press Space to start sorting.",
        );
        self.status = RunStatus::Idle;
        self.elapsed = Duration::ZERO;
    }

    /// Start sorting the original array.
    pub fn start(&mut self) {
        self.launch(false);
    }

    fn launch(&mut self, paused: bool) {
        if self.status.is_active() {
            return;
        }
        if self.status != RunStatus::Idle {
            self.chart.load(self.original.clone(), "");
        }

        self.generation += 1;
        self.playback.set_paused(paused);
        info!(algorithm = %self.algorithm, size = self.original.len(), "tui run started");
        self.worker = Some(SortWorker::spawn(
            self.generation,
            self.algorithm,
            self.original.clone(),
            Arc::clone(&self.playback),
            self.pacing,
            self.tx.clone(),
        ));
        self.started = Some(Instant::now());
        self.status = if paused {
            RunStatus::Paused
        } else {
            RunStatus::Running
        };
    }

    /// Pause a running sort.
    pub fn pause(&mut self) {
        if self.status == RunStatus::Running {
            self.playback.set_paused(true);
            self.status = RunStatus::Paused;
            self.chart.set_description(
                "Sorting paused. Press Space to continue or s to proceed one step at a time.",
            );
        }
    }

    /// Resume a paused sort.
    pub fn resume(&mut self) {
        if self.status == RunStatus::Paused {
            self.playback.set_paused(false);
            self.status = RunStatus::Running;
        }
    }

    /// Advance one pause point. Starts a paused run when idle.
    pub fn step(&mut self) {
        match self.status {
            RunStatus::Paused => self.playback.grant_step(),
            RunStatus::Idle | RunStatus::Finished | RunStatus::Stopped => {
                self.launch(true);
                self.playback.grant_step();
            }
            RunStatus::Running => {}
        }
    }

    /// Stop the worker, leaving the array as it is.
    ///
    /// Messages already sent by the worker are applied before returning, so
    /// nothing from this run can reach a later reset or regenerate.
    pub fn stop(&mut self) {
        let was_active = self.status.is_active();
        if let Some(mut worker) = self.worker.take() {
            worker.stop();
            self.update();
        }
        if was_active && self.status != RunStatus::Finished {
            self.finish_timing();
            self.status = RunStatus::Stopped;
            self.chart.set_description("Sorting stopped.");
        }
    }

    /// Stop and restore the original array.
    pub fn reset(&mut self) {
        self.stop();
        self.chart
            .load(self.original.clone(), "Array reset to original state.");
        self.status = RunStatus::Idle;
        self.elapsed = Duration::ZERO;
    }

    /// Drain worker messages into the chart.
    pub fn update(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            if message.generation() != self.generation {
                continue;
            }
            match message {
                WorkerMessage::Event { event, .. } => event.replay_into(&mut self.chart),
                WorkerMessage::Finished { outcome, .. } => {
                    self.worker = None;
                    self.finish_timing();
                    self.chart.set_stats(outcome.stats);
                    if outcome.completed {
                        self.status = RunStatus::Finished;
                    } else if self.status.is_active() {
                        self.status = RunStatus::Stopped;
                    }
                }
            }
        }
    }

    fn finish_timing(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed();
        }
    }

    fn set_size(&mut self, size: usize) {
        let size = size.clamp(UI_MIN_SIZE, UI_MAX_SIZE);
        if size != self.size {
            self.size = size;
            self.generate();
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => {
                self.stop();
                self.should_quit = true;
            }
            KeyCode::Char(' ') => match self.status {
                RunStatus::Running => self.pause(),
                RunStatus::Paused => self.resume(),
                _ => self.start(),
            },
            KeyCode::Char('s') => self.step(),
            KeyCode::Esc => self.stop(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('+' | '=') => self.playback.set_speed(self.speed().faster()),
            KeyCode::Char('-') => self.playback.set_speed(self.speed().slower()),
            _ if self.status.is_active() => {}
            KeyCode::Char('g') => self.generate(),
            KeyCode::Char('a') => {
                self.algorithm = self.algorithm.next();
            }
            KeyCode::Char('p') => {
                self.pattern = self.pattern.next();
                self.generate();
            }
            KeyCode::Char(']') => self.set_size(self.size + SIZE_STEP),
            KeyCode::Char('[') => self.set_size(self.size.saturating_sub(SIZE_STEP)),
            _ => {}
        }
    }

    /// Whether the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}
