//! Input router: pick the emplacement that answers a launch and fire a salvo.

use skyguard_core::components::Emplacement;
use skyguard_core::config::GameConfig;
use skyguard_core::events::GameEvent;
use skyguard_core::types::Vec2;

use crate::error::SimError;
use crate::store::EntityStore;

/// Launch a salvo at `aim` from the nearest standing emplacement that has
/// ammo. Returns the number of interceptors created; 0 when `aim` is not
/// finite or no emplacement qualifies, in which case nothing is mutated.
pub fn launch(
    store: &mut EntityStore,
    config: &GameConfig,
    aim: Vec2,
    events: &mut Vec<GameEvent>,
) -> Result<u32, SimError> {
    if !aim.is_finite() {
        log::debug!("launch at non-finite aim {aim} ignored");
        return Ok(0);
    }

    let Some((entity, emplacement)) = store
        .emplacements()
        .into_iter()
        .filter(|(_, e)| !e.destroyed && e.ammo > 0)
        .min_by(|(_, a), (_, b)| {
            a.position
                .distance_squared(aim)
                .total_cmp(&b.position.distance_squared(aim))
        })
    else {
        log::debug!("launch at ({:.0}, {:.0}) ignored: no emplacement ready", aim.x, aim.y);
        return Ok(0);
    };

    let shots = emplacement.ammo.min(config.interceptor.salvo_size);
    let mut stored = store.world().get::<&mut Emplacement>(entity)?;
    stored.ammo -= shots;
    let ammo_left = stored.ammo;
    drop(stored);

    for i in 0..shots {
        let offset = salvo_offset(i, shots, config.interceptor.salvo_spread);
        store.spawn_interceptor(
            emplacement.position,
            Vec2::new(aim.x + offset, aim.y),
            config.interceptor.speed,
            emplacement.slot,
        );
    }

    events.push(GameEvent::SalvoLaunched {
        slot: emplacement.slot,
        shots,
        ammo_left,
    });
    Ok(shots)
}

/// Lateral offset of shot `index` in a salvo of `shots`, centred on the aim point.
pub fn salvo_offset(index: u32, shots: u32, spread: f32) -> f32 {
    (index as f32 - (shots as f32 - 1.0) / 2.0) * spread
}
