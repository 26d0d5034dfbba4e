//! The `TableWriter` trait implemented by storage backends.

use traffic_core::{HazardEvent, SensorSample, SimState};

use crate::OutputResult;

/// Storage seam between the error policy in
/// [`EventLogger`][crate::EventLogger] and a concrete backend.
///
/// Backends stay honest about failures by returning `OutputResult`; the
/// facade decides whether to surface or swallow them.
pub trait TableWriter {
    /// Create the output directory and (re)write header rows as needed.
    fn initialize(&mut self) -> OutputResult<()>;

    /// Append one row per sample, all stamped with `state`'s timestamp and
    /// step.
    fn write_samples(&mut self, samples: &[SensorSample], state: &SimState) -> OutputResult<()>;

    /// Append one hazard event row.
    fn write_event(&mut self, event: &HazardEvent) -> OutputResult<()>;
}
