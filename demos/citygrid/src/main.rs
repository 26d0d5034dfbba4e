//! citygrid — minimal end-to-end run of the traffic telemetry logger.
//!
//! Drives a synthetic 3-avenue street grid: a handful of vehicles shuttle
//! along the avenues while the logger records one sensor batch per step.
//! A pothole opens mid-run and flags every vehicle on its avenue.
//!
//! Run twice to see append mode at work: rows from the second run land
//! after the first run's rows, with a single header.

use anyhow::Result;

use traffic_core::{HazardEvent, OutputConfig, SensorSample, SimState};
use traffic_output::{CsvTables, EventLogger};

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLE_COUNT: usize = 4;
const STEP_SECS:     f64   = 0.5;
const TOTAL_STEPS:   u64   = 60;
const POTHOLE_STEP:  u64   = 20;
const BLOCK_M:       f64   = 100.0;  // avenue spacing and wrap length unit

// Stand-in for the deployment's config file.
const CONFIG_JSON: &str = r#"{
    "output_dir": "output_data",
    "csv_append_mode": true
}"#;

fn main() -> Result<()> {
    let config: OutputConfig = serde_json::from_str(CONFIG_JSON)?;

    let mut logger = EventLogger::new(CsvTables::new(&config));
    if !logger.initialize() {
        eprintln!("continuing without CSV output");
    }

    let mut state = SimState::new();

    for _ in 0..TOTAL_STEPS {
        if state.step == POTHOLE_STEP {
            let event = HazardEvent::named("pothole", state.sim_time)
                .with_detail("lane", "avenue_1_0")
                .with_detail("severity", "major");
            logger.write_event(&event);
        }
        let pothole_open = state.step >= POTHOLE_STEP;

        let samples: Vec<SensorSample> = (0..VEHICLE_COUNT)
            .map(|v| vehicle_sample(v, &state, pothole_open))
            .collect();
        logger.write_samples(&samples, &state);

        state.advance(STEP_SECS);
    }

    if let Some(e) = logger.take_error() {
        eprintln!("run finished with output errors: {e}");
    }

    let tables = logger.into_writer();
    println!(
        "wrote {TOTAL_STEPS} steps x {VEHICLE_COUNT} vehicles to {}",
        tables.samples_path().display()
    );
    println!("hazard events in {}", tables.events_path().display());
    Ok(())
}

/// Telemetry for vehicle `v`: a constant-speed shuttle along avenue `v % 3`.
fn vehicle_sample(v: usize, state: &SimState, pothole_open: bool) -> SensorSample {
    let avenue = v % 3;
    let speed = 8.0 + v as f64;
    let lane_id = format!("avenue_{avenue}_0");
    let hazard_active = pothole_open && lane_id == "avenue_1_0";

    SensorSample {
        vehicle_id: format!("veh{v}"),
        vehicle_type: if v % 2 == 0 { "car".to_owned() } else { "auto_rickshaw".to_owned() },
        x: (speed * state.sim_time) % (3.0 * BLOCK_M),
        y: avenue as f64 * BLOCK_M,
        speed,
        acceleration: 0.0,
        angle: 90.0,
        lane_id,
        hazard_active,
    }
}
