//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// Points live in the logical play field: x grows to the right,
/// y grows downward from the top edge.
pub use glam::Vec2;

/// Stable entity identity, assigned from a monotonically increasing counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of playing ticks run so far.
    pub tick: u64,
    /// Session clock in milliseconds, advanced by the `dt` of every playing tick.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += dt_ms.max(0.0);
    }
}
