//! Kinematics and detonation: advance projectiles along their flights and
//! turn arrivals into primary blasts.

use hecs::Entity;

use skyguard_core::components::*;
use skyguard_core::config::GameConfig;
use skyguard_core::enums::{BlastKind, TargetKind};
use skyguard_core::events::GameEvent;

use crate::error::SimError;
use crate::store::EntityStore;
use crate::trajectory;

/// Outcome of one kinematics pass.
#[derive(Debug, Default)]
pub struct Advance {
    /// Projectiles that reached their target and detonated.
    pub detonated: u32,
    /// Entities whose position went non-finite. They are left in place for
    /// the caller to remove; every other projectile is still advanced.
    pub faults: Vec<SimError>,
}

/// Advance every hostile. Arrivals detonate at their target, wreck whatever
/// stands within the impact proximity of that x, and are removed this tick.
pub fn advance_hostiles(
    store: &mut EntityStore,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> Result<Advance, SimError> {
    let mut arrived: Vec<(Entity, Hostile)> = Vec::new();
    let mut faults = Vec::new();

    for (entity, hostile) in store.world_mut().query_mut::<&mut Hostile>() {
        hostile.progress += hostile.speed;
        hostile.position = trajectory::position(
            hostile.start,
            hostile.target,
            hostile.progress,
            hostile.trajectory,
            hostile.amplitude,
        );
        if !hostile.position.is_finite() {
            faults.push(SimError::NonFinitePosition {
                entity,
                id: hostile.id,
            });
        } else if hostile.progress >= 1.0 {
            arrived.push((entity, *hostile));
        }
    }

    arrived.sort_by_key(|(_, h)| h.id);
    let count = arrived.len() as u32;
    for (entity, hostile) in arrived {
        store.world_mut().despawn(entity)?;
        let blast = store.spawn_blast(BlastKind::Impact, hostile.target, &config.blasts);
        events.push(GameEvent::Detonation {
            blast,
            kind: BlastKind::Impact,
            at: hostile.target,
        });
        destroy_near(store, hostile.target.x, config.impact_proximity, events)?;
    }
    Ok(Advance {
        detonated: count,
        faults,
    })
}

/// Advance every interceptor along its straight flight. Arrivals detonate
/// into an intercept blast at their aim point and are removed this tick.
pub fn advance_interceptors(
    store: &mut EntityStore,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> Result<Advance, SimError> {
    let mut arrived: Vec<(Entity, Interceptor)> = Vec::new();
    let mut faults = Vec::new();

    for (entity, interceptor) in store.world_mut().query_mut::<&mut Interceptor>() {
        interceptor.progress += interceptor.speed;
        interceptor.position = interceptor.start.lerp(interceptor.target, interceptor.progress);
        if !interceptor.position.is_finite() {
            faults.push(SimError::NonFinitePosition {
                entity,
                id: interceptor.id,
            });
        } else if interceptor.progress >= 1.0 {
            arrived.push((entity, *interceptor));
        }
    }

    arrived.sort_by_key(|(_, i)| i.id);
    let count = arrived.len() as u32;
    for (entity, interceptor) in arrived {
        store.world_mut().despawn(entity)?;
        let blast = store.spawn_blast(BlastKind::Intercept, interceptor.target, &config.blasts);
        events.push(GameEvent::Detonation {
            blast,
            kind: BlastKind::Intercept,
            at: interceptor.target,
        });
    }
    Ok(Advance {
        detonated: count,
        faults,
    })
}

/// Mark standing ground targets and emplacements near `impact_x` destroyed.
/// Destruction is one-way; nothing here ever clears the flag.
fn destroy_near(
    store: &mut EntityStore,
    impact_x: f32,
    proximity: f32,
    events: &mut Vec<GameEvent>,
) -> Result<u32, SimError> {
    let mut destroyed = 0;

    for (entity, target) in store.ground_targets() {
        if !target.destroyed && (target.position.x - impact_x).abs() < proximity {
            store.world().get::<&mut GroundTarget>(entity)?.destroyed = true;
            destroyed += 1;
            log::debug!("ground target {} destroyed", target.id);
            events.push(GameEvent::TargetDestroyed {
                id: target.id,
                kind: TargetKind::City,
            });
        }
    }

    for (entity, emplacement) in store.emplacements() {
        if !emplacement.destroyed && (emplacement.position.x - impact_x).abs() < proximity {
            store.world().get::<&mut Emplacement>(entity)?.destroyed = true;
            destroyed += 1;
            log::info!("emplacement {:?} destroyed", emplacement.slot);
            events.push(GameEvent::TargetDestroyed {
                id: emplacement.id,
                kind: TargetKind::Emplacement,
            });
        }
    }

    Ok(destroyed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::enums::{EmplacementSlot, TrajectoryKind};
    use skyguard_core::types::Vec2;

    use crate::world_setup;

    fn field() -> (EntityStore, GameConfig) {
        let config = GameConfig::default();
        let mut store = EntityStore::new();
        world_setup::setup_session(&mut store, &config);
        (store, config)
    }

    #[test]
    fn hostile_moves_along_its_path() {
        let (mut store, config) = field();
        let mut events = Vec::new();
        store.spawn_hostile(Vec2::new(0.0, 0.0), Vec2::new(100.0, 500.0), 0.1, TrajectoryKind::Straight, 0.0);

        advance_hostiles(&mut store, &config, &mut events).unwrap();
        let (_, hostile) = store.hostiles()[0];
        assert!((hostile.progress - 0.1).abs() < 1e-6);
        assert!((hostile.position - Vec2::new(10.0, 50.0)).length() < 1e-3);
        assert!(events.is_empty());
    }

    #[test]
    fn arrival_detonates_and_destroys_nearby_target() {
        let (mut store, config) = field();
        let mut events = Vec::new();
        let city = store.ground_targets()[0].1;
        let aim = city.position + Vec2::new(5.0, 0.0);
        store.spawn_hostile(Vec2::new(city.position.x, 0.0), aim, 0.5, TrajectoryKind::Straight, 0.0);

        assert_eq!(advance_hostiles(&mut store, &config, &mut events).unwrap().detonated, 0);
        assert_eq!(advance_hostiles(&mut store, &config, &mut events).unwrap().detonated, 1);

        assert_eq!(store.hostile_count(), 0);
        let blasts = store.blasts();
        assert_eq!(blasts.len(), 1);
        assert_eq!(blasts[0].1.kind, BlastKind::Impact);
        assert_eq!(blasts[0].1.center, aim);
        assert_eq!(blasts[0].1.max_radius, config.blasts.impact_radius);

        let targets = store.ground_targets();
        assert!(targets[0].1.destroyed);
        assert_eq!(targets.iter().filter(|(_, t)| t.destroyed).count(), 1);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::TargetDestroyed { kind: TargetKind::City, .. })));
    }

    #[test]
    fn impact_far_from_everything_destroys_nothing() {
        let (mut store, config) = field();
        let mut events = Vec::new();
        store.spawn_hostile(Vec2::new(600.0, 0.0), Vec2::new(700.0, 560.0), 1.0, TrajectoryKind::Zigzag, 40.0);

        advance_hostiles(&mut store, &config, &mut events).unwrap();
        assert!(store.ground_targets().iter().all(|(_, t)| !t.destroyed));
        assert!(store.emplacements().iter().all(|(_, e)| !e.destroyed));
        assert_eq!(store.blast_count(), 1);
    }

    #[test]
    fn impact_on_emplacement_destroys_it() {
        let (mut store, config) = field();
        let mut events = Vec::new();
        let center = config.emplacement(EmplacementSlot::Center).unwrap().position;
        store.spawn_hostile(Vec2::new(400.0, 0.0), center, 1.0, TrajectoryKind::Straight, 0.0);

        advance_hostiles(&mut store, &config, &mut events).unwrap();
        let emplacements = store.emplacements();
        let destroyed: Vec<_> = emplacements.iter().filter(|(_, e)| e.destroyed).collect();
        assert_eq!(destroyed.len(), 1);
        assert_eq!(destroyed[0].1.slot, EmplacementSlot::Center);
    }

    #[test]
    fn interceptor_detonates_at_aim_point() {
        let (mut store, config) = field();
        let mut events = Vec::new();
        let aim = Vec2::new(300.0, 200.0);
        store.spawn_interceptor(Vec2::new(400.0, 540.0), aim, 0.25, EmplacementSlot::Center);

        for _ in 0..3 {
            assert_eq!(advance_interceptors(&mut store, &config, &mut events).unwrap().detonated, 0);
        }
        assert_eq!(advance_interceptors(&mut store, &config, &mut events).unwrap().detonated, 1);
        assert_eq!(store.interceptor_count(), 0);

        let blasts = store.blasts();
        assert_eq!(blasts[0].1.kind, BlastKind::Intercept);
        assert_eq!(blasts[0].1.center, aim);
        assert_eq!(blasts[0].1.max_radius, config.blasts.intercept_radius);
    }

    #[test]
    fn non_finite_position_is_reported() {
        let (mut store, config) = field();
        let mut events = Vec::new();
        let (entity, id) = store.spawn_hostile(Vec2::ZERO, Vec2::ONE, f32::NAN, TrajectoryKind::Straight, 0.0);

        let advance = advance_hostiles(&mut store, &config, &mut events).unwrap();
        assert_eq!(advance.detonated, 0);
        match advance.faults.as_slice() {
            [SimError::NonFinitePosition { entity: e, id: i }] => {
                assert_eq!(*e, entity);
                assert_eq!(*i, id);
            }
            other => panic!("expected one NonFinitePosition, got {other:?}"),
        }
    }

    #[test]
    fn faulty_hostile_does_not_hold_back_arrivals() {
        let (mut store, config) = field();
        let mut events = Vec::new();
        let (_, healthy) = store.spawn_hostile(Vec2::new(700.0, 0.0), Vec2::new(700.0, 560.0), 1.0, TrajectoryKind::Straight, 0.0);
        let (_, broken) = store.spawn_hostile(Vec2::ZERO, Vec2::ONE, f32::NAN, TrajectoryKind::Straight, 0.0);
        let (_, later) = store.spawn_hostile(Vec2::new(100.0, 0.0), Vec2::new(100.0, 500.0), 0.1, TrajectoryKind::Straight, 0.0);

        let advance = advance_hostiles(&mut store, &config, &mut events).unwrap();
        assert_eq!(advance.detonated, 1);
        assert_eq!(advance.faults.len(), 1);
        assert_eq!(store.blast_count(), 1);

        let remaining: Vec<_> = store.hostiles().into_iter().map(|(_, h)| h).collect();
        assert!(remaining.iter().all(|h| h.id != healthy));
        assert!(remaining.iter().any(|h| h.id == broken));
        let moved = remaining.iter().find(|h| h.id == later).unwrap();
        assert!((moved.progress - 0.1).abs() < 1e-6);
    }

    #[test]
    fn faulty_interceptor_does_not_hold_back_arrivals() {
        let (mut store, config) = field();
        let mut events = Vec::new();
        store.spawn_interceptor(Vec2::new(400.0, 540.0), Vec2::new(f32::NAN, 200.0), 0.5, EmplacementSlot::Center);
        store.spawn_interceptor(Vec2::new(400.0, 540.0), Vec2::new(300.0, 200.0), 1.0, EmplacementSlot::Center);

        let advance = advance_interceptors(&mut store, &config, &mut events).unwrap();
        assert_eq!(advance.detonated, 1);
        assert_eq!(advance.faults.len(), 1);
        assert_eq!(store.blasts()[0].1.center, Vec2::new(300.0, 200.0));
        assert_eq!(store.interceptor_count(), 1);
    }
}
