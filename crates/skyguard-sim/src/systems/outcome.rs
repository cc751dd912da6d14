//! Terminal-condition check, run once at the end of every playing tick.

use skyguard_core::config::GameConfig;
use skyguard_core::enums::GamePhase;

use crate::store::EntityStore;
use crate::wave::{ScoreState, WaveState};

/// Phase the session should move to, or `None` to keep playing.
///
/// Priority: win, then loss, then wave clear. A tick that crosses the win
/// score wins even if it also lost the last emplacement.
pub fn evaluate(
    store: &EntityStore,
    score: &ScoreState,
    wave: &WaveState,
    config: &GameConfig,
) -> Option<GamePhase> {
    if score.score >= config.win_score {
        return Some(GamePhase::Win);
    }
    if store.all_emplacements_destroyed()
        || (config.lose_when_cities_destroyed && store.all_ground_targets_destroyed())
    {
        return Some(GamePhase::Lose);
    }
    if wave.quota_reached() && store.hostile_count() == 0 && store.blast_count() == 0 {
        return Some(GamePhase::Transition);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::components::{Emplacement, GroundTarget};
    use skyguard_core::enums::BlastKind;
    use skyguard_core::types::Vec2;

    use crate::world_setup;

    fn field(config: &GameConfig) -> (EntityStore, WaveState) {
        let mut store = EntityStore::new();
        world_setup::setup_session(&mut store, config);
        let wave = world_setup::start_level(&mut store, config, 1);
        (store, wave)
    }

    fn wreck_emplacements(store: &mut EntityStore) {
        for (_, e) in store.world_mut().query_mut::<&mut Emplacement>() {
            e.destroyed = true;
        }
    }

    #[test]
    fn keeps_playing_mid_wave() {
        let config = GameConfig::default();
        let (store, wave) = field(&config);
        assert_eq!(evaluate(&store, &ScoreState::default(), &wave, &config), None);
    }

    #[test]
    fn win_beats_loss() {
        let config = GameConfig::default();
        let (mut store, wave) = field(&config);
        wreck_emplacements(&mut store);
        let score = ScoreState {
            score: config.win_score,
            ..ScoreState::default()
        };
        assert_eq!(evaluate(&store, &score, &wave, &config), Some(GamePhase::Win));
        assert_eq!(
            evaluate(&store, &ScoreState::default(), &wave, &config),
            Some(GamePhase::Lose)
        );
    }

    #[test]
    fn wave_clear_waits_for_blasts() {
        let config = GameConfig::default();
        let (mut store, mut wave) = field(&config);
        wave.spawned = wave.quota;
        let blast = store.spawn_blast(BlastKind::Impact, Vec2::ZERO, &config.blasts);
        assert_eq!(evaluate(&store, &ScoreState::default(), &wave, &config), None);

        let (entity, _) = store
            .blasts()
            .into_iter()
            .find(|(_, b)| b.id == blast)
            .unwrap();
        store.world_mut().despawn(entity).unwrap();
        assert_eq!(
            evaluate(&store, &ScoreState::default(), &wave, &config),
            Some(GamePhase::Transition)
        );
    }

    #[test]
    fn losing_cities_only_counts_when_enabled() {
        let mut config = GameConfig::default();
        let (mut store, wave) = field(&config);
        for (_, g) in store.world_mut().query_mut::<&mut GroundTarget>() {
            g.destroyed = true;
        }
        assert_eq!(evaluate(&store, &ScoreState::default(), &wave, &config), None);

        config.lose_when_cities_destroyed = true;
        assert_eq!(
            evaluate(&store, &ScoreState::default(), &wave, &config),
            Some(GamePhase::Lose)
        );
    }
}
