//! Session and level setup: fixed entities and per-level resets.

use skyguard_core::components::Emplacement;
use skyguard_core::config::GameConfig;

use crate::store::EntityStore;
use crate::wave::WaveState;

/// Wipe the store and lay out a fresh field: every ground target and
/// emplacement standing, every emplacement at full ammo.
pub fn setup_session(store: &mut EntityStore, config: &GameConfig) {
    store.clear();
    for &position in &config.cities {
        store.spawn_ground_target(position);
    }
    for emplacement in &config.emplacements {
        store.spawn_emplacement(emplacement);
    }
}

/// Prepare `level`: clear projectiles and blasts, refill surviving
/// emplacements, and restart the spawn schedule.
///
/// Destroyed ground targets and emplacements stay destroyed.
pub fn start_level(store: &mut EntityStore, config: &GameConfig, level: u32) -> WaveState {
    store.clear_projectiles();
    for (_entity, emplacement) in store.world_mut().query_mut::<&mut Emplacement>() {
        if !emplacement.destroyed {
            emplacement.ammo = emplacement.max_ammo;
        }
    }
    WaveState::for_level(level, &config.wave)
}
