//! JSON Lines export of the event stream.

use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::engine::{Pause, Role, StepEvent, StepSink};
use crate::error::{SortError, SortResult};

/// Streaming exporter writing one JSON object per reported event.
///
/// Sink methods cannot fail, so the first write error is kept and every later
/// event is dropped; [`Self::finish`] surfaces it.
pub struct EventStream<W: Write> {
    writer: BufWriter<W>,
    event_count: u64,
    include_pacing: bool,
    error: Option<SortError>,
}

impl<W: Write> EventStream<W> {
    /// Stream events into `writer`, skipping pacing requests.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            event_count: 0,
            include_pacing: false,
            error: None,
        }
    }

    /// Also write pacing requests.
    #[must_use]
    pub fn with_pacing(mut self, include: bool) -> Self {
        self.include_pacing = include;
        self
    }

    /// Events written so far.
    #[must_use]
    pub const fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Flush and return the number of events written.
    ///
    /// # Errors
    ///
    /// Returns the first serialization or write error, or a flush failure.
    pub fn finish(mut self) -> SortResult<u64> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer
            .flush()
            .map_err(|e| SortError::io(format!("Flush failed: {e}")))?;
        Ok(self.event_count)
    }

    fn write<T: Serialize>(&mut self, event: &StepEvent<T>) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_string(event)
            .map_err(|e| SortError::serialization(format!("JSON serialization failed: {e}")))
            .and_then(|json| {
                writeln!(self.writer, "{json}")
                    .map_err(|e| SortError::io(format!("Write failed: {e}")))
            });
        match result {
            Ok(()) => self.event_count += 1,
            Err(error) => self.error = Some(error),
        }
    }

    fn highlight(&mut self, role: Role, indices: &[usize]) {
        self.write::<()>(&StepEvent::Highlight {
            role,
            indices: indices.to_vec(),
        });
    }
}

impl<T: Serialize + Clone, W: Write> StepSink<T> for EventStream<W> {
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

    fn report_array_state(&mut self, values: &[T]) {
        self.write(&StepEvent::ArrayState(values.to_vec()));
    }

    fn report_description(&mut self, text: &str) {
        self.write::<()>(&StepEvent::Description(text.to_owned()));
    }

    fn pace(&mut self, pause: Pause) {
        if self.include_pacing {
            self.write::<()>(&StepEvent::Pace(pause));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::engine::{run, CancellationToken};
    use crate::visualization::RecordingSink;

    #[test]
    fn test_stream_writes_one_line_per_event() {
        let mut buffer = Vec::new();
        let mut stream = EventStream::new(&mut buffer);
        run(Algorithm::Insertion, vec![2, 1], &mut stream, &CancellationToken::new());
        let written = stream.finish().expect("finish");

        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text.lines().count() as u64, written);
        for line in text.lines() {
            let _: StepEvent<u32> = serde_json::from_str(line).expect("valid event");
        }
    }

    #[test]
    fn test_stream_matches_recording() {
        let mut buffer = Vec::new();
        let mut stream = EventStream::new(&mut buffer);
        run(Algorithm::Merge, vec![3, 1, 2], &mut stream, &CancellationToken::new());
        stream.finish().expect("finish");

        let mut recording = RecordingSink::new();
        run(Algorithm::Merge, vec![3, 1, 2], &mut recording, &CancellationToken::new());

        let parsed: Vec<StepEvent<u32>> = String::from_utf8(buffer)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid event"))
            .collect();
        assert_eq!(parsed, recording.events());
    }

    #[test]
    fn test_pacing_is_opt_in() {
        let mut quiet = Vec::new();
        let mut stream = EventStream::new(&mut quiet);
        StepSink::<u32>::pace(&mut stream, Pause::Step);
        assert_eq!(stream.finish().expect("finish"), 0);

        let mut loud = Vec::new();
        let mut stream = EventStream::new(&mut loud).with_pacing(true);
        StepSink::<u32>::pace(&mut stream, Pause::Step);
        assert_eq!(stream.finish().expect("finish"), 1);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn test_write_failure_surfaces_on_finish() {
        let mut stream = EventStream::new(FailingWriter);
        StepSink::<u32>::report_description(&mut stream, "x");
        assert!(stream.finish().is_err());
    }
}
