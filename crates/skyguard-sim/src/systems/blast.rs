//! Blast lifecycle and the collision / chain-reaction pass.
//!
//! One pass per tick: every blast advances its radius and opacity, then tests
//! every still-live hostile. Caught hostiles become secondary (chain) blasts,
//! spawned only after the pass at radius 0, so a kill can seed at most one
//! new generation of blasts per tick.

use hecs::Entity;

use skyguard_core::components::{Blast, Hostile};
use skyguard_core::config::{BlastConfig, GameConfig};
use skyguard_core::enums::BlastKind;
use skyguard_core::types::{EntityId, Vec2};

use crate::error::SimError;
use crate::store::EntityStore;

/// A hostile removed by a blast or the special ability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub hostile: EntityId,
    pub at: Vec2,
    /// The blast spawned where the hostile died.
    pub blast: EntityId,
}

/// Grow or decay one blast by a single tick.
///
/// Radius is clamped to `[0, max_radius]`.
pub fn advance(blast: &mut Blast, config: &BlastConfig) {
    if blast.growing {
        blast.radius = (blast.radius + config.growth_per_tick).min(blast.max_radius);
        if blast.radius >= blast.max_radius {
            blast.growing = false;
        }
    } else {
        blast.radius = (blast.radius - config.shrink_per_tick).max(0.0);
        blast.opacity -= config.fade_per_tick;
    }
}

/// Containment test without a square root.
pub fn contains(blast: &Blast, point: Vec2) -> bool {
    point.distance_squared(blast.center) < blast.radius * blast.radius
}

/// Run the collision pass. Returns kills in the order they happened.
///
/// Blasts whose opacity drops to 0 still test this tick, then are removed.
pub fn run(store: &mut EntityStore, config: &GameConfig) -> Result<Vec<Kill>, SimError> {
    let mut live: Vec<(Entity, Hostile)> = store.hostiles();
    let mut caught: Vec<(Entity, Hostile)> = Vec::new();
    let mut expired: Vec<Entity> = Vec::new();

    for (entity, mut blast) in store.blasts() {
        advance(&mut blast, &config.blasts);

        live.retain(|&(hostile_entity, hostile)| {
            if contains(&blast, hostile.position) {
                caught.push((hostile_entity, hostile));
                false
            } else {
                true
            }
        });

        *store.world().get::<&mut Blast>(entity)? = blast;
        if blast.opacity <= 0.0 {
            expired.push(entity);
        }
    }

    for entity in expired {
        store.world_mut().despawn(entity)?;
    }

    let mut kills = Vec::with_capacity(caught.len());
    for (entity, hostile) in caught {
        store.world_mut().despawn(entity)?;
        let blast = store.spawn_blast(BlastKind::Chain, hostile.position, &config.blasts);
        kills.push(Kill {
            hostile: hostile.id,
            at: hostile.position,
            blast,
        });
    }
    Ok(kills)
}
