//! Special ability: wipe every live hostile at once, on a cooldown.

use skyguard_core::config::GameConfig;
use skyguard_core::enums::BlastKind;

use crate::error::SimError;
use crate::store::EntityStore;
use crate::systems::blast::Kill;
use crate::wave::AbilityState;

/// Fire the ability if it is enabled and off cooldown.
///
/// Every hostile is removed and replaced by an ability blast at its
/// position. Returns `None` when the ability is not ready; the cooldown
/// restarts even when there was nothing to hit.
pub fn try_fire(
    store: &mut EntityStore,
    ability: &mut AbilityState,
    now_ms: f64,
    config: &GameConfig,
) -> Result<Option<Vec<Kill>>, SimError> {
    if !ability.is_ready(now_ms, &config.ability) {
        log::debug!(
            "ability not ready ({:.0} ms left)",
            ability.remaining_ms(now_ms, &config.ability)
        );
        return Ok(None);
    }
    ability.last_used_ms = Some(now_ms);

    let hostiles = store.hostiles();
    let mut kills = Vec::with_capacity(hostiles.len());
    for (entity, hostile) in hostiles {
        store.world_mut().despawn(entity)?;
        let blast = store.spawn_blast(BlastKind::Ability, hostile.position, &config.blasts);
        kills.push(Kill {
            hostile: hostile.id,
            at: hostile.position,
            blast,
        });
    }
    log::info!("ability fired: {} hostiles destroyed", kills.len());
    Ok(Some(kills))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::config::AbilityConfig;
    use skyguard_core::enums::TrajectoryKind;
    use skyguard_core::types::Vec2;

    #[test]
    fn clears_every_hostile() {
        let config = GameConfig::default();
        let mut store = EntityStore::new();
        let mut ability = AbilityState::default();
        for x in [100.0, 200.0, 300.0] {
            store.spawn_hostile(Vec2::new(x, 0.0), Vec2::new(x, 560.0), 0.001, TrajectoryKind::Straight, 0.0);
        }

        let kills = try_fire(&mut store, &mut ability, 500.0, &config).unwrap().unwrap();
        assert_eq!(kills.len(), 3);
        assert_eq!(store.hostile_count(), 0);
        let blasts = store.blasts();
        assert_eq!(blasts.len(), 3);
        assert!(blasts.iter().all(|(_, b)| b.kind == BlastKind::Ability && b.max_radius == 60.0));
        assert_eq!(ability.last_used_ms, Some(500.0));
    }

    #[test]
    fn respects_cooldown() {
        let config = GameConfig::default();
        let mut store = EntityStore::new();
        let mut ability = AbilityState::default();

        assert!(try_fire(&mut store, &mut ability, 0.0, &config).unwrap().is_some());
        store.spawn_hostile(Vec2::ZERO, Vec2::ONE, 0.001, TrajectoryKind::Straight, 0.0);
        assert!(try_fire(&mut store, &mut ability, 29_999.0, &config).unwrap().is_none());
        assert_eq!(store.hostile_count(), 1);
        assert!(try_fire(&mut store, &mut ability, 30_000.0, &config).unwrap().is_some());
        assert_eq!(store.hostile_count(), 0);
    }

    #[test]
    fn disabled_ability_never_fires() {
        let config = GameConfig {
            ability: AbilityConfig {
                enabled: false,
                ..AbilityConfig::default()
            },
            ..GameConfig::default()
        };
        let mut store = EntityStore::new();
        let mut ability = AbilityState::default();
        assert!(try_fire(&mut store, &mut ability, 0.0, &config).unwrap().is_none());
        assert_eq!(ability.last_used_ms, None);
    }
}
