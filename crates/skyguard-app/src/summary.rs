//! End-of-session report, logged as one JSON line.

use serde::Serialize;

use skyguard_core::enums::GamePhase;
use skyguard_core::state::GameStateSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub outcome: GamePhase,
    pub level: u32,
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub score: u64,
    pub kills: u32,
    pub currency: u64,
    pub interceptors_fired: u32,
    pub ground_targets_standing: usize,
    pub emplacements_standing: usize,
}

impl From<&GameStateSnapshot> for SessionSummary {
    fn from(snapshot: &GameStateSnapshot) -> Self {
        Self {
            outcome: snapshot.phase,
            level: snapshot.level,
            ticks: snapshot.time.tick,
            elapsed_secs: snapshot.time.elapsed_ms / 1000.0,
            score: snapshot.score.score,
            kills: snapshot.score.kills,
            currency: snapshot.score.currency,
            interceptors_fired: snapshot.score.interceptors_fired,
            ground_targets_standing: snapshot.ground_targets.iter().filter(|g| !g.destroyed).count(),
            emplacements_standing: snapshot.emplacements.iter().filter(|e| !e.destroyed).count(),
        }
    }
}
