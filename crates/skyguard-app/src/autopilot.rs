//! Scripted player for headless sessions.
//!
//! Reads a snapshot and picks the next command: a shot just ahead of the
//! lowest hostile, or the ability once the board gets crowded.

use glam::Vec2;

use skyguard_core::commands::PlayerCommand;
use skyguard_core::enums::GamePhase;
use skyguard_core::state::GameStateSnapshot;

/// Aim points closer than this to an in-flight interceptor's target count
/// as already covered.
const COVERED_RADIUS: f32 = 40.0;

/// How far below a hostile to aim. Interceptors take time to arrive.
const LEAD: Vec2 = Vec2::new(0.0, 25.0);

/// Hostile count at which the ability is worth spending.
const CROWDED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    pub crowded: usize,
    pub covered_radius: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            crowded: CROWDED,
            covered_radius: COVERED_RADIUS,
        }
    }
}

impl Autopilot {
    /// Next command for `snapshot`, if any.
    pub fn decide(&self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        match snapshot.phase {
            GamePhase::Menu => Some(PlayerCommand::StartGame),
            GamePhase::Transition => Some(PlayerCommand::AdvanceLevel),
            GamePhase::Win | GamePhase::Lose => None,
            GamePhase::Playing => self.playing(snapshot),
        }
    }

    fn playing(&self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.ability.enabled
            && snapshot.ability.cooldown_remaining_ms <= 0.0
            && snapshot.hostiles.len() >= self.crowded
        {
            return Some(PlayerCommand::UseAbility);
        }

        let aim = self.aim(snapshot)?;
        Some(PlayerCommand::Launch { x: aim.x, y: aim.y })
    }

    /// Lead point on the lowest hostile nobody is already shooting at.
    pub fn aim(&self, snapshot: &GameStateSnapshot) -> Option<Vec2> {
        let covered = |point: Vec2| {
            snapshot
                .interceptors
                .iter()
                .any(|i| i.target.distance(point) < self.covered_radius)
        };
        snapshot
            .hostiles
            .iter()
            .map(|h| h.position + LEAD)
            .filter(|&point| !covered(point))
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::enums::TrajectoryKind;
    use skyguard_core::state::{HostileView, InterceptorView};
    use skyguard_core::types::EntityId;

    fn hostile(id: u64, x: f32, y: f32) -> HostileView {
        HostileView {
            id: EntityId(id),
            position: Vec2::new(x, y),
            target: Vec2::new(x, 560.0),
            progress: y / 560.0,
            trajectory: TrajectoryKind::Straight,
        }
    }

    fn playing() -> GameStateSnapshot {
        GameStateSnapshot {
            phase: GamePhase::Playing,
            ..GameStateSnapshot::default()
        }
    }

    #[test]
    fn test_aims_at_lowest_uncovered_hostile() {
        let mut snap = playing();
        snap.hostiles = vec![hostile(1, 100.0, 300.0), hostile(2, 500.0, 400.0)];
        let pilot = Autopilot::default();
        assert_eq!(pilot.aim(&snap), Some(Vec2::new(500.0, 425.0)));

        snap.interceptors = vec![InterceptorView {
            id: EntityId(9),
            position: Vec2::new(400.0, 540.0),
            target: Vec2::new(500.0, 425.0),
            progress: 0.1,
        }];
        assert_eq!(pilot.aim(&snap), Some(Vec2::new(100.0, 325.0)));
    }

    #[test]
    fn test_uses_ability_when_crowded() {
        let mut snap = playing();
        snap.ability.enabled = true;
        snap.hostiles = (0..5).map(|i| hostile(i, 100.0 * i as f32, 100.0)).collect();
        assert_eq!(Autopilot::default().decide(&snap), Some(PlayerCommand::UseAbility));

        snap.ability.cooldown_remaining_ms = 1.0;
        assert!(matches!(
            Autopilot::default().decide(&snap),
            Some(PlayerCommand::Launch { .. })
        ));
    }

    #[test]
    fn test_phase_driven_commands() {
        let pilot = Autopilot::default();
        let mut snap = GameStateSnapshot::default();
        assert_eq!(pilot.decide(&snap), Some(PlayerCommand::StartGame));
        snap.phase = GamePhase::Transition;
        assert_eq!(pilot.decide(&snap), Some(PlayerCommand::AdvanceLevel));
        snap.phase = GamePhase::Lose;
        assert_eq!(pilot.decide(&snap), None);
        snap.phase = GamePhase::Playing;
        assert_eq!(pilot.decide(&snap), None);
    }
}
