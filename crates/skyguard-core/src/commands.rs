//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands that do not apply in the current state are silent no-ops.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire a salvo at a point already mapped into logical space.
    Launch { x: f32, y: f32 },
    /// Trigger the area-effect special ability (rate limited by its cooldown).
    UseAbility,
    /// Start a fresh session at level 1 (from the menu or after win/lose).
    StartGame,
    /// Continue to the next level after a cleared wave.
    AdvanceLevel,
    /// Go back to the menu from a finished or cleared state.
    ReturnToMenu,
}
