//! Events emitted by the simulation for audio and UI feedback.
//!
//! Events are collected during a tick and handed out with that tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    HostileSpawned {
        id: EntityId,
        trajectory: TrajectoryKind,
        target: Vec2,
    },
    SalvoLaunched {
        slot: EmplacementSlot,
        shots: u32,
        ammo_left: u32,
    },
    /// A projectile reached progress 1 and produced a primary blast.
    Detonation { blast: EntityId, kind: BlastKind, at: Vec2 },
    TargetDestroyed { id: EntityId, kind: TargetKind },
    HostileKilled { id: EntityId, at: Vec2 },
    AbilityFired { kills: u32 },
    CurrencyCollected { amount: u64, total: u64 },
    /// Every N kills, for encouragement messages.
    KillMilestone { kills: u32 },
    PhaseChanged { from: GamePhase, to: GamePhase, level: u32 },
    /// A tick failed and was skipped; the loop keeps running.
    TickFault { tick: u64, message: String },
}
