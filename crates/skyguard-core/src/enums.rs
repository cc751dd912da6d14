//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    /// Wave cleared, waiting for the player to advance.
    Transition,
    Win,
    Lose,
}

impl GamePhase {
    /// Win and Lose only leave through an explicit restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Win | GamePhase::Lose)
    }
}

/// Motion pattern of a hostile projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrajectoryKind {
    /// Plain linear interpolation.
    #[default]
    Straight,
    /// Single lateral hump, zero at both ends.
    Arched,
    /// Three full lateral sine periods over the flight.
    Oscillating,
    /// Lateral triangle wave, one up-down cycle per 0.2 progress.
    Zigzag,
}

/// One of the three fixed launch sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmplacementSlot {
    Left,
    Center,
    Right,
}

/// What produced a blast. Decides its max radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlastKind {
    /// Hostile reached its target.
    Impact,
    /// Player interceptor reached its aim point.
    Intercept,
    /// Secondary blast from a destroyed hostile.
    Chain,
    /// Area-effect special ability.
    Ability,
}

/// Kind of a stationary objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    City,
    Emplacement,
}
