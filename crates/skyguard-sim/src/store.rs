//! Entity store: the hecs world plus the id counter that names its entities.
//!
//! Input handling and the tick driver share one store and mutate it in
//! place, so a launch is visible to the very next tick. Queries that feed
//! ordered passes return entities sorted by `EntityId`, which is creation
//! order.

use hecs::{Entity, World};

use skyguard_core::components::*;
use skyguard_core::config::{BlastConfig, EmplacementConfig};
use skyguard_core::enums::*;
use skyguard_core::types::{EntityId, Vec2};

pub struct EntityStore {
    world: World,
    next_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            next_id: 1,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Hand out the next identity. Ids are never reused within a store.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    // --- Factories ---

    pub fn spawn_hostile(
        &mut self,
        start: Vec2,
        target: Vec2,
        speed: f32,
        trajectory: TrajectoryKind,
        amplitude: f32,
    ) -> (Entity, EntityId) {
        let id = self.allocate_id();
        let entity = self.world.spawn((Hostile {
            id,
            start,
            target,
            position: start,
            speed,
            progress: 0.0,
            trajectory,
            amplitude,
        },));
        (entity, id)
    }

    pub fn spawn_interceptor(
        &mut self,
        start: Vec2,
        target: Vec2,
        speed: f32,
        launched_from: EmplacementSlot,
    ) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((Interceptor {
            id,
            start,
            target,
            position: start,
            speed,
            progress: 0.0,
            launched_from,
        },));
        id
    }

    /// New blasts start at radius 0 in the growing phase.
    pub fn spawn_blast(&mut self, kind: BlastKind, center: Vec2, config: &BlastConfig) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((Blast {
            id,
            kind,
            center,
            radius: 0.0,
            max_radius: config.max_radius(kind),
            growing: true,
            opacity: 1.0,
        },));
        id
    }

    pub fn spawn_ground_target(&mut self, position: Vec2) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((GroundTarget {
            id,
            position,
            destroyed: false,
        },));
        id
    }

    pub fn spawn_emplacement(&mut self, config: &EmplacementConfig) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((Emplacement {
            id,
            slot: config.slot,
            position: config.position,
            ammo: config.max_ammo,
            max_ammo: config.max_ammo,
            destroyed: false,
        },));
        id
    }

    pub fn spawn_coin(&mut self, position: Vec2, fall_speed: f32, value: u64) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((Coin {
            id,
            position,
            fall_speed,
            value,
        },));
        id
    }

    // --- Ordered views ---

    pub fn hostiles(&self) -> Vec<(Entity, Hostile)> {
        sorted::<Hostile, _>(&self.world, |h| h.id)
    }

    pub fn interceptors(&self) -> Vec<(Entity, Interceptor)> {
        sorted::<Interceptor, _>(&self.world, |i| i.id)
    }

    pub fn blasts(&self) -> Vec<(Entity, Blast)> {
        sorted::<Blast, _>(&self.world, |b| b.id)
    }

    pub fn ground_targets(&self) -> Vec<(Entity, GroundTarget)> {
        sorted::<GroundTarget, _>(&self.world, |g| g.id)
    }

    pub fn emplacements(&self) -> Vec<(Entity, Emplacement)> {
        sorted::<Emplacement, _>(&self.world, |e| e.id)
    }

    pub fn coins(&self) -> Vec<(Entity, Coin)> {
        sorted::<Coin, _>(&self.world, |c| c.id)
    }

    // --- Counts and predicates ---

    pub fn hostile_count(&self) -> usize {
        self.world.query::<&Hostile>().iter().count()
    }

    pub fn interceptor_count(&self) -> usize {
        self.world.query::<&Interceptor>().iter().count()
    }

    pub fn blast_count(&self) -> usize {
        self.world.query::<&Blast>().iter().count()
    }

    /// Positions of every standing ground target, then every standing emplacement.
    pub fn live_target_positions(&self) -> Vec<Vec2> {
        let cities = self
            .ground_targets()
            .into_iter()
            .filter(|(_, g)| !g.destroyed)
            .map(|(_, g)| g.position);
        let emplacements = self
            .emplacements()
            .into_iter()
            .filter(|(_, e)| !e.destroyed)
            .map(|(_, e)| e.position);
        cities.chain(emplacements).collect()
    }

    /// Vacuously false when there are no emplacements at all.
    pub fn all_emplacements_destroyed(&self) -> bool {
        let emplacements = self.emplacements();
        !emplacements.is_empty() && emplacements.iter().all(|(_, e)| e.destroyed)
    }

    pub fn all_ground_targets_destroyed(&self) -> bool {
        let targets = self.ground_targets();
        !targets.is_empty() && targets.iter().all(|(_, g)| g.destroyed)
    }

    // --- Bulk removal ---

    /// Drop every hostile, interceptor and blast. Fixed entities and coins stay.
    pub fn clear_projectiles(&mut self) {
        let mut doomed: Vec<Entity> = Vec::new();
        doomed.extend(self.world.query::<&Hostile>().iter().map(|(e, _)| e));
        doomed.extend(self.world.query::<&Interceptor>().iter().map(|(e, _)| e));
        doomed.extend(self.world.query::<&Blast>().iter().map(|(e, _)| e));
        for entity in doomed {
            if let Err(err) = self.world.despawn(entity) {
                log::warn!("could not clear {entity:?}: {err}");
            }
        }
    }

    /// Drop every coin still in flight. Returns how many were removed.
    pub fn clear_coins(&mut self) -> usize {
        let doomed: Vec<Entity> = self.world.query::<&Coin>().iter().map(|(e, _)| e).collect();
        for &entity in &doomed {
            if let Err(err) = self.world.despawn(entity) {
                log::warn!("could not clear {entity:?}: {err}");
            }
        }
        doomed.len()
    }

    /// Drop every entity. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.world.clear();
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted<T, K>(world: &World, key: K) -> Vec<(Entity, T)>
where
    T: hecs::Component + Copy,
    K: Fn(&T) -> EntityId,
{
    let mut items: Vec<(Entity, T)> = world
        .query::<&T>()
        .iter()
        .map(|(entity, item)| (entity, *item))
        .collect();
    items.sort_by_key(|(_, item)| key(item));
    items
}
