//! CSV storage backend.
//!
//! Creates two files in the configured output directory:
//! - `simulation_data.csv` — per-vehicle sensor samples
//! - `hazard_events.csv`   — hazard occurrences
//!
//! No file handle is held between calls: every operation opens its
//! destination, writes, flushes, and closes.  Rows are on disk when the call
//! returns, and a crash loses at most the in-flight batch.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use traffic_core::{HazardEvent, OutputConfig, SensorSample, SimState};

use crate::OutputResult;
use crate::writer::TableWriter;

/// Samples table file name.
pub const SAMPLES_FILE: &str = "simulation_data.csv";
/// Events table file name.
pub const EVENTS_FILE: &str = "hazard_events.csv";

const SAMPLES_HEADER: [&str; 11] = [
    "timestamp", "step", "vehicle_id", "type",
    "x", "y", "speed", "acceleration", "angle", "lane_id", "hazard_active",
];

const EVENTS_HEADER: [&str; 3] = ["timestamp", "hazard_name", "metadata"];

/// Writes sensor samples and hazard events to two CSV files.
pub struct CsvTables {
    dir:          PathBuf,
    samples_path: PathBuf,
    events_path:  PathBuf,
    append:       bool,
}

impl CsvTables {
    /// Build a backend for `config`.
    ///
    /// No filesystem access happens here; call
    /// [`initialize`][TableWriter::initialize] before writing.
    pub fn new(config: &OutputConfig) -> Self {
        let dir = config.output_dir.clone();
        Self {
            samples_path: dir.join(SAMPLES_FILE),
            events_path:  dir.join(EVENTS_FILE),
            append:       config.csv_append_mode,
            dir,
        }
    }

    /// Path of the samples table.
    pub fn samples_path(&self) -> &Path {
        &self.samples_path
    }

    /// Path of the events table.
    pub fn events_path(&self) -> &Path {
        &self.events_path
    }

    /// (Re)create one table file with its header row.
    ///
    /// In append mode an existing file is left untouched — its header was
    /// written when the file was first created.
    fn init_table(&self, path: &Path, header: &[&str]) -> OutputResult<()> {
        if self.append && path.exists() {
            return Ok(());
        }
        let mut w = csv::Writer::from_writer(File::create(path)?);
        w.write_record(header)?;
        w.flush()?;
        Ok(())
    }

    /// Open `path` for appending, creating it if a write beats `initialize`.
    fn open_append(path: &Path) -> OutputResult<csv::Writer<File>> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(csv::Writer::from_writer(file))
    }
}

impl TableWriter for CsvTables {
    fn initialize(&mut self) -> OutputResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        self.init_table(&self.samples_path, &SAMPLES_HEADER)?;
        self.init_table(&self.events_path, &EVENTS_HEADER)?;
        Ok(())
    }

    fn write_samples(&mut self, samples: &[SensorSample], state: &SimState) -> OutputResult<()> {
        if samples.is_empty() {
            return Ok(());
        }

        // The whole batch shares the step's clock stamp.
        let timestamp = state.sim_time.to_string();
        let step = state.step.to_string();

        let mut w = Self::open_append(&self.samples_path)?;
        for s in samples {
            w.write_record(&[
                timestamp.clone(),
                step.clone(),
                s.vehicle_id.clone(),
                s.vehicle_type.clone(),
                format!("{:.2}", s.x),
                format!("{:.2}", s.y),
                format!("{:.2}", s.speed),
                format!("{:.2}", s.acceleration),
                format!("{:.2}", s.angle),
                s.lane_id.clone(),
                (s.hazard_active as u8).to_string(),
            ])?;
        }
        w.flush()?;
        Ok(())
    }

    fn write_event(&mut self, event: &HazardEvent) -> OutputResult<()> {
        let mut w = Self::open_append(&self.events_path)?;
        w.write_record(&[
            event.timestamp.to_string(),
            event.name.clone().unwrap_or_else(|| "unknown".to_owned()),
            render_metadata(&event.metadata),
        ])?;
        w.flush()?;
        Ok(())
    }
}

/// Render a metadata map as `{key=value, key=value}` with keys in ascending
/// order; the empty map renders as `{}`.
///
/// The encoding is stable across runs so downstream tooling can parse the
/// column.  The CSV layer quotes the field whenever it contains separators.
pub(crate) fn render_metadata(map: &BTreeMap<String, String>) -> String {
    let mut out = String::from("{");
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out.push('}');
    out
}
