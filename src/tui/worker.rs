//! Background sort worker for the TUI.
//!
//! The sort runs on its own thread so the draw loop never blocks on a pause.
//! Every reported event is forwarded over a channel; pacing happens on the
//! worker through the shared [`Playback`].

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::algorithms::Algorithm;
use crate::engine::{
    run, CancellationToken, Pacing, Pause, Playback, Role, RunOutcome, StepEvent, StepSink,
};

/// Message from a worker to the UI, tagged with the run it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// A reported event.
    Event {
        /// Run generation.
        generation: u64,
        /// The event.
        event: StepEvent<u32>,
    },
    /// The run ended (completed or stopped).
    Finished {
        /// Run generation.
        generation: u64,
        /// Final result.
        outcome: RunOutcome<u32>,
    },
}

impl WorkerMessage {
    /// Run generation this message belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        match self {
            Self::Event { generation, .. } | Self::Finished { generation, .. } => *generation,
        }
    }
}

/// Sink that forwards events to the UI and paces through [`Playback`].
///
/// If the receiving side has gone away the run is cancelled.
pub struct ChannelSink {
    generation: u64,
    tx: Sender<WorkerMessage>,
    playback: Arc<Playback>,
    pacing: Pacing,
    cancel: CancellationToken,
}

impl ChannelSink {
    /// Create a sink for run `generation`.
    #[must_use]
    pub fn new(
        generation: u64,
        tx: Sender<WorkerMessage>,
        playback: Arc<Playback>,
        pacing: Pacing,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            generation,
            tx,
            playback,
            pacing,
            cancel,
        }
    }

    fn send(&self, event: StepEvent<u32>) {
        let message = WorkerMessage::Event {
            generation: self.generation,
            event,
        };
        if self.tx.send(message).is_err() {
            self.cancel.cancel();
        }
    }

    fn highlight(&self, role: Role, indices: &[usize]) {
        self.send(StepEvent::Highlight {
            role,
            indices: indices.to_vec(),
        });
    }
}

impl StepSink<u32> for ChannelSink {
    fn report_comparison(&mut self, indices: &[usize]) {
        self.highlight(Role::Compare, indices);
    }

    fn report_swap(&mut self, indices: &[usize]) {
        self.highlight(Role::Swap, indices);
    }

    fn report_pivot(&mut self, indices: &[usize]) {
        self.highlight(Role::Pivot, indices);
    }

    fn report_sorted(&mut self, indices: &[usize]) {
        self.highlight(Role::Sorted, indices);
    }

    fn report_array_state(&mut self, values: &[u32]) {
        self.send(StepEvent::ArrayState(values.to_vec()));
    }

    fn report_description(&mut self, text: &str) {
        self.send(StepEvent::Description(text.to_owned()));
    }

    fn pace(&mut self, pause: Pause) {
        self.playback.wait(pause, &self.pacing, &self.cancel);
    }
}

/// Handle to a running sort.
#[derive(Debug)]
pub struct SortWorker {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl SortWorker {
    /// Start sorting `values` with `algorithm` on a new thread.
    #[must_use]
    pub fn spawn(
        generation: u64,
        algorithm: Algorithm,
        values: Vec<u32>,
        playback: Arc<Playback>,
        pacing: Pacing,
        tx: Sender<WorkerMessage>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        let handle = thread::spawn(move || {
            let mut sink =
                ChannelSink::new(generation, tx.clone(), playback, pacing, worker_cancel.clone());
            let outcome = run(algorithm, values, &mut sink, &worker_cancel);
            debug!(generation, completed = outcome.completed, "worker finished");
            // The UI may already have moved on; nothing to do then.
            let _ = tx.send(WorkerMessage::Finished {
                generation,
                outcome,
            });
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Request a stop and wait for the thread to exit.
    ///
    /// Pauses observe the stop flag, so this returns promptly even when the
    /// playback is paused.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Whether the thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for SortWorker {
    fn drop(&mut self) {
        self.stop();
    }
}
