//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EntityId, SimTime, Vec2};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level: u32,
    pub score: ScoreView,
    pub wave: WaveView,
    pub ability: AbilityView,
    pub hostiles: Vec<HostileView>,
    pub interceptors: Vec<InterceptorView>,
    pub blasts: Vec<BlastView>,
    pub ground_targets: Vec<GroundTargetView>,
    pub emplacements: Vec<EmplacementView>,
    pub coins: Vec<CoinView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub win_score: u64,
    pub kills: u32,
    pub currency: u64,
    pub interceptors_fired: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    pub spawned: u32,
    pub quota: u32,
    pub spawn_interval_ms: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityView {
    pub enabled: bool,
    pub cooldown_remaining_ms: f64,
    /// Whole seconds, rounded up, for the HUD readout.
    pub cooldown_remaining_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostileView {
    pub id: EntityId,
    pub position: Vec2,
    pub target: Vec2,
    pub progress: f32,
    pub trajectory: TrajectoryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: EntityId,
    pub position: Vec2,
    pub target: Vec2,
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastView {
    pub id: EntityId,
    pub kind: BlastKind,
    pub center: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTargetView {
    pub id: EntityId,
    pub position: Vec2,
    pub destroyed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmplacementView {
    pub id: EntityId,
    pub slot: EmplacementSlot,
    pub position: Vec2,
    pub ammo: u32,
    pub max_ammo: u32,
    pub destroyed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinView {
    pub id: EntityId,
    pub position: Vec2,
}
