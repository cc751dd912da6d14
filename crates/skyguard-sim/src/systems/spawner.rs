//! Spawner: timed creation of hostiles, scaled by level and capped by quota.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::config::GameConfig;
use skyguard_core::events::GameEvent;
use skyguard_core::types::{EntityId, Vec2};

use crate::store::EntityStore;
use crate::wave::WaveState;

/// Advance the spawn timer by `dt_ms` and emit a hostile when it runs out.
///
/// Every expiry restarts the timer, even when the quota is already met or
/// nothing is left to aim at.
pub fn run(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    config: &GameConfig,
    dt_ms: f64,
    events: &mut Vec<GameEvent>,
) -> Option<EntityId> {
    wave.since_last_spawn_ms += dt_ms;
    if wave.since_last_spawn_ms <= wave.interval_ms {
        return None;
    }
    wave.since_last_spawn_ms = 0.0;
    wave.interval_ms = config.wave.spawn_interval_ms(wave.level);

    if wave.quota_reached() {
        return None;
    }

    let targets = store.live_target_positions();
    let Some(&target) = targets.choose(rng) else {
        log::warn!("spawn skipped at level {}: nothing left to target", wave.level);
        return None;
    };
    let profile = config.trajectories.choose(rng)?;

    let start = Vec2::new(rng.gen_range(0.0..config.width), 0.0);
    let speed = config.hostile_speed.sample(wave.level, rng.gen::<f32>());
    let amplitude = if profile.amplitude_max > profile.amplitude_min {
        rng.gen_range(profile.amplitude_min..profile.amplitude_max)
    } else {
        profile.amplitude_min
    };

    let (_entity, id) = store.spawn_hostile(start, target, speed, profile.kind, amplitude);
    wave.spawned += 1;
    log::debug!(
        "spawned hostile {id} ({:?}) {}/{} at level {}",
        profile.kind,
        wave.spawned,
        wave.quota,
        wave.level
    );
    events.push(GameEvent::HostileSpawned {
        id,
        trajectory: profile.kind,
        target,
    });
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use skyguard_core::components::{Emplacement, GroundTarget, Hostile};

    use crate::world_setup;

    fn setup(config: &GameConfig) -> (EntityStore, WaveState, ChaCha8Rng) {
        let mut store = EntityStore::new();
        world_setup::setup_session(&mut store, config);
        let wave = world_setup::start_level(&mut store, config, 1);
        (store, wave, ChaCha8Rng::seed_from_u64(7))
    }

    #[test]
    fn waits_for_interval_to_be_exceeded() {
        let config = GameConfig::default();
        let (mut store, mut wave, mut rng) = setup(&config);
        let mut events = Vec::new();
        let interval = wave.interval_ms;

        assert!(run(&mut store, &mut rng, &mut wave, &config, interval, &mut events).is_none());
        assert!(run(&mut store, &mut rng, &mut wave, &config, 1.0, &mut events).is_some());
        assert_eq!(wave.spawned, 1);
        assert_eq!(wave.since_last_spawn_ms, 0.0);
        assert_eq!(store.hostile_count(), 1);
        assert!(matches!(events[0], GameEvent::HostileSpawned { .. }));
    }

    #[test]
    fn stops_at_quota() {
        let config = GameConfig::default();
        let (mut store, mut wave, mut rng) = setup(&config);
        let mut events = Vec::new();
        for _ in 0..100 {
            run(&mut store, &mut rng, &mut wave, &config, 5_000.0, &mut events);
        }
        assert_eq!(wave.spawned, wave.quota);
        assert_eq!(store.hostile_count() as u32, wave.quota);
    }

    #[test]
    fn hostiles_start_on_top_edge_and_aim_at_live_targets() {
        let config = GameConfig::default();
        let (mut store, mut wave, mut rng) = setup(&config);
        let mut events = Vec::new();
        for _ in 0..10 {
            run(&mut store, &mut rng, &mut wave, &config, 5_000.0, &mut events);
        }
        let targets = store.live_target_positions();
        for (_, hostile) in store.hostiles() {
            assert_eq!(hostile.start.y, 0.0);
            assert!((0.0..config.width).contains(&hostile.start.x));
            assert!(targets.contains(&hostile.target));
            assert!(hostile.speed >= config.hostile_speed.sample(1, 0.0));
            assert!(hostile.speed <= config.hostile_speed.sample(1, 1.0));
            let profile = config
                .trajectories
                .iter()
                .find(|p| p.kind == hostile.trajectory)
                .unwrap();
            assert!(hostile.amplitude >= profile.amplitude_min);
            assert!(hostile.amplitude <= profile.amplitude_max);
        }
    }

    #[test]
    fn skips_spawn_when_everything_is_destroyed() {
        let config = GameConfig::default();
        let (mut store, mut wave, mut rng) = setup(&config);
        for (_, target) in store.world_mut().query_mut::<&mut GroundTarget>() {
            target.destroyed = true;
        }
        for (_, emplacement) in store.world_mut().query_mut::<&mut Emplacement>() {
            emplacement.destroyed = true;
        }
        let mut events = Vec::new();
        assert!(run(&mut store, &mut rng, &mut wave, &config, 5_000.0, &mut events).is_none());
        assert_eq!(wave.spawned, 0);
        assert_eq!(store.world().query::<&Hostile>().iter().count(), 0);
    }

    #[test]
    fn interval_shrinks_with_level() {
        let config = GameConfig::default();
        let (mut store, _, mut rng) = setup(&config);
        let mut wave = world_setup::start_level(&mut store, &config, 10);
        let mut events = Vec::new();
        run(&mut store, &mut rng, &mut wave, &config, 5_000.0, &mut events);
        assert_eq!(wave.interval_ms, 500.0);
    }
}
