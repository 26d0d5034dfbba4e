//! `EventLogger<W>` — best-effort facade over a [`TableWriter`] backend.

use traffic_core::{HazardEvent, SensorSample, SimState};

use crate::writer::TableWriter;
use crate::{OutputError, OutputResult};

/// Converts backend failures into the contract the simulation loop expects:
/// a boolean from [`initialize`][Self::initialize], silent no-ops from the
/// write operations.  Output is advisory — a full disk must not stop a
/// running simulation.
///
/// Each failure is printed to stderr at the point it occurs, and the first
/// one is kept for later inspection with [`take_error`][Self::take_error].
pub struct EventLogger<W: TableWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: TableWriter> EventLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Prepare the output tables.
    ///
    /// Returns `false` (after printing a diagnostic) if the backend failed;
    /// the caller may keep running without output.
    pub fn initialize(&mut self) -> bool {
        let result = self.writer.initialize();
        self.report(result, "failed to initialize output tables")
    }

    /// Append a batch of sensor samples, all stamped from `state`.
    ///
    /// Empty batches are a no-op and never touch the backend.
    pub fn write_samples(&mut self, samples: &[SensorSample], state: &SimState) {
        if samples.is_empty() {
            return;
        }
        let result = self.writer.write_samples(samples, state);
        self.report(result, "error writing sensor samples");
    }

    /// Append one hazard event.
    pub fn write_event(&mut self, event: &HazardEvent) {
        let result = self.writer.write_event(event);
        self.report(result, "error writing hazard event");
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` when every operation so far succeeded; taking the
    /// error resets the slot.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner backend (e.g. to inspect file paths after a run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn report(&mut self, result: OutputResult<()>, context: &str) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                eprintln!("{context}: {e}");
                // Keep only the first error.
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
                false
            }
        }
    }
}
