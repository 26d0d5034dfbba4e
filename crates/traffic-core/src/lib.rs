//! `traffic-core` — foundational types for the traffic simulation workspace.
//!
//! This crate is a dependency of every other crate in the workspace.  It
//! intentionally has no intra-workspace dependencies and a single optional
//! external one (`serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                          |
//! |------------|-----------------------------------|
//! | [`config`] | `OutputConfig`                    |
//! | [`sensor`] | `SensorSample`, `HazardEvent`     |
//! | [`time`]   | `SimState`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types so      |
//!           | application crates can load `OutputConfig` from JSON/TOML. |

pub mod config;
pub mod sensor;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::OutputConfig;
pub use sensor::{HazardEvent, SensorSample};
pub use time::SimState;
