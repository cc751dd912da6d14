//! ECS components for hecs entities.
//!
//! Every entity carries exactly one of these. Components are plain data;
//! game logic lives in the simulation systems.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Vec2};

/// A falling projectile the player must destroy before it lands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hostile {
    pub id: EntityId,
    pub start: Vec2,
    pub target: Vec2,
    pub position: Vec2,
    /// Progress gained per tick.
    pub speed: f32,
    /// Flight progress in [0, 1]; the hostile detonates on reaching 1.
    pub progress: f32,
    pub trajectory: TrajectoryKind,
    /// Lateral deviation scale for non-straight trajectories.
    pub amplitude: f32,
}

/// A player-fired projectile that detonates at its aim point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interceptor {
    pub id: EntityId,
    pub start: Vec2,
    /// Aim point, including the salvo fan offset.
    pub target: Vec2,
    pub position: Vec2,
    pub speed: f32,
    pub progress: f32,
    pub launched_from: EmplacementSlot,
}

/// A temporary area-of-effect region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blast {
    pub id: EntityId,
    pub kind: BlastKind,
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    /// True until the radius first reaches `max_radius`.
    pub growing: bool,
    /// Fades after the growing phase; the blast is removed at 0.
    pub opacity: f32,
}

/// A stationary objective ("city").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundTarget {
    pub id: EntityId,
    pub position: Vec2,
    pub destroyed: bool,
}

/// A launch site with finite ammunition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emplacement {
    pub id: EntityId,
    pub slot: EmplacementSlot,
    pub position: Vec2,
    pub ammo: u32,
    pub max_ammo: u32,
    pub destroyed: bool,
}

/// A falling collectible dropped by a kill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: EntityId,
    pub position: Vec2,
    pub fall_speed: f32,
    pub value: u64,
}
