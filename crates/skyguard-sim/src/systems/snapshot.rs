//! Snapshot system: reads the entity store and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only; it never modifies the store.

use skyguard_core::config::GameConfig;
use skyguard_core::enums::GamePhase;
use skyguard_core::events::GameEvent;
use skyguard_core::state::*;
use skyguard_core::types::SimTime;

use crate::store::EntityStore;
use crate::wave::{AbilityState, ScoreState, WaveState};

/// Everything outside the store that a snapshot reports.
pub struct SessionView<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: &'a WaveState,
    pub score: &'a ScoreState,
    pub ability: &'a AbilityState,
    pub config: &'a GameConfig,
}

pub fn build_snapshot(store: &EntityStore, session: SessionView<'_>, events: Vec<GameEvent>) -> GameStateSnapshot {
    let SessionView {
        time,
        phase,
        wave,
        score,
        ability,
        config,
    } = session;

    GameStateSnapshot {
        time,
        phase,
        level: wave.level,
        score: ScoreView {
            score: score.score,
            win_score: config.win_score,
            kills: score.kills,
            currency: score.currency,
            interceptors_fired: score.interceptors_fired,
        },
        wave: WaveView {
            spawned: wave.spawned,
            quota: wave.quota,
            spawn_interval_ms: wave.interval_ms,
        },
        ability: AbilityView {
            enabled: config.ability.enabled,
            cooldown_remaining_ms: ability.remaining_ms(time.elapsed_ms, &config.ability),
            cooldown_remaining_secs: ability.remaining_secs(time.elapsed_ms, &config.ability),
        },
        hostiles: store
            .hostiles()
            .into_iter()
            .map(|(_, h)| HostileView {
                id: h.id,
                position: h.position,
                target: h.target,
                progress: h.progress,
                trajectory: h.trajectory,
            })
            .collect(),
        interceptors: store
            .interceptors()
            .into_iter()
            .map(|(_, i)| InterceptorView {
                id: i.id,
                position: i.position,
                target: i.target,
                progress: i.progress,
            })
            .collect(),
        blasts: store
            .blasts()
            .into_iter()
            .map(|(_, b)| BlastView {
                id: b.id,
                kind: b.kind,
                center: b.center,
                radius: b.radius,
                opacity: b.opacity.max(0.0),
            })
            .collect(),
        ground_targets: store
            .ground_targets()
            .into_iter()
            .map(|(_, g)| GroundTargetView {
                id: g.id,
                position: g.position,
                destroyed: g.destroyed,
            })
            .collect(),
        emplacements: store
            .emplacements()
            .into_iter()
            .map(|(_, e)| EmplacementView {
                id: e.id,
                slot: e.slot,
                position: e.position,
                ammo: e.ammo,
                max_ammo: e.max_ammo,
                destroyed: e.destroyed,
            })
            .collect(),
        coins: store
            .coins()
            .into_iter()
            .map(|(_, c)| CoinView {
                id: c.id,
                position: c.position,
            })
            .collect(),
        events,
    }
}
