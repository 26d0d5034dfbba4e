//! `traffic-output` — tabular event logging for the traffic simulation.
//!
//! Two append-only CSV tables are produced in the configured output
//! directory:
//!
//! | Table   | File                  | One row per               |
//! |---------|-----------------------|---------------------------|
//! | samples | `simulation_data.csv` | vehicle × simulation step |
//! | events  | `hazard_events.csv`   | hazard occurrence         |
//!
//! The storage backend implements [`TableWriter`] and is driven through
//! [`EventLogger`], which owns the best-effort error policy: print a
//! diagnostic, keep the first error for inspection, never propagate.  A
//! failed write must not stop a running simulation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use traffic_core::{OutputConfig, SimState};
//! use traffic_output::{CsvTables, EventLogger};
//!
//! let mut logger = EventLogger::new(CsvTables::new(&OutputConfig::default()));
//! if !logger.initialize() {
//!     eprintln!("continuing without CSV output");
//! }
//! logger.write_samples(&samples, &state);
//! logger.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod logger;
pub mod writer;


pub use csv::{CsvTables, EVENTS_FILE, SAMPLES_FILE};
pub use error::{OutputError, OutputResult};
pub use logger::EventLogger;
pub use writer::TableWriter;
