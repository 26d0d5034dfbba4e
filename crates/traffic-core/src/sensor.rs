//! Per-vehicle telemetry and hazard event records.

use std::collections::BTreeMap;

/// One vehicle's sensor reading at a simulation step.
///
/// Every field is optional at the source: sensors that did not report leave
/// the `Default` fallbacks in place (empty strings, zeros, `false`), and a
/// partially populated reading is still a valid output row.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSample {
    pub vehicle_id: String,
    /// Vehicle class label, e.g. `car`, `bus`, `auto_rickshaw`.
    pub vehicle_type: String,
    /// Position in scenario coordinates (metres).
    pub x: f64,
    pub y: f64,
    /// Speed in m/s.
    pub speed: f64,
    /// Acceleration in m/s².
    pub acceleration: f64,
    /// Heading in degrees.
    pub angle: f64,
    pub lane_id: String,
    /// `true` while the vehicle is inside an active hazard zone.
    pub hazard_active: bool,
}

/// A hazard occurrence (pothole, waterlogging, breakdown, …).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardEvent {
    /// Simulation time the hazard fired.
    pub timestamp: f64,
    /// Hazard kind.  Rendered as `unknown` in output when absent.
    pub name: Option<String>,
    /// Free-form detail map.  Ordered, so renderings are deterministic.
    pub metadata: BTreeMap<String, String>,
}

impl HazardEvent {
    /// A named hazard with no metadata.
    pub fn named(name: impl Into<String>, timestamp: f64) -> Self {
        Self {
            timestamp,
            name: Some(name.into()),
            metadata: BTreeMap::new(),
        }
    }

    /// Add one metadata entry, builder style.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
