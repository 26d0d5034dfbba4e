//! Simulation clock state.
//!
//! The engine advances in fixed steps; every sensor batch written during a
//! step is stamped with the same `(sim_time, step)` pair, so readers can
//! group rows by step without parsing float timestamps.

use std::fmt;

/// The clock context the simulation engine exposes to the output layer.
///
/// `SimState` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimState {
    /// Simulated seconds elapsed since scenario start.
    pub sim_time: f64,
    /// Steps completed since scenario start.
    pub step: u64,
}

impl SimState {
    /// A clock at scenario start (`sim_time = 0.0`, `step = 0`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one step of `dt` simulated seconds.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.sim_time += dt;
        self.step += 1;
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} (t={:.1}s)", self.step, self.sim_time)
    }
}
