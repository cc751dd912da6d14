//! Kill side effects beyond score: collectible drops and milestones.
//!
//! What a kill drops is a pluggable policy so variants without a currency
//! system share the exact same kill path.

use skyguard_core::components::Coin;
use skyguard_core::config::{GameConfig, RewardConfig};
use skyguard_core::types::Vec2;

use crate::error::SimError;
use crate::store::EntityStore;

pub trait RewardPolicy: Send {
    /// Called once per kill, at the position the hostile died.
    fn on_kill(&mut self, store: &mut EntityStore, at: Vec2);

    /// Per-tick upkeep. Returns currency collected this tick.
    fn update(&mut self, store: &mut EntityStore) -> Result<u64, SimError>;
}

/// Kills drop nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRewards;

impl RewardPolicy for NoRewards {
    fn on_kill(&mut self, _store: &mut EntityStore, _at: Vec2) {}

    fn update(&mut self, _store: &mut EntityStore) -> Result<u64, SimError> {
        Ok(0)
    }
}

/// Kills drop a coin that falls and is credited when it reaches the
/// collection line.
#[derive(Debug, Clone, Copy)]
pub struct CoinRewards {
    pub value: u64,
    pub fall_speed: f32,
    /// y at or past which a coin is collected.
    pub collect_y: f32,
}

impl RewardPolicy for CoinRewards {
    fn on_kill(&mut self, store: &mut EntityStore, at: Vec2) {
        store.spawn_coin(at, self.fall_speed, self.value);
    }

    fn update(&mut self, store: &mut EntityStore) -> Result<u64, SimError> {
        let mut collected = Vec::new();
        let mut lost = Vec::new();
        for (entity, coin) in store.world_mut().query_mut::<&mut Coin>() {
            coin.position.y += coin.fall_speed;
            if !coin.position.is_finite() {
                lost.push((entity, coin.id));
            } else if coin.position.y >= self.collect_y {
                collected.push((entity, coin.value));
            }
        }

        for (entity, id) in lost {
            log::warn!("dropping coin {id} at a non-finite position");
            store.world_mut().despawn(entity)?;
        }
        let mut total = 0u64;
        for (entity, value) in collected {
            store.world_mut().despawn(entity)?;
            total = total.saturating_add(value);
        }
        Ok(total)
    }
}

/// Build the policy a configuration asks for.
pub fn policy_for(config: &GameConfig) -> Box<dyn RewardPolicy> {
    match config.rewards {
        RewardConfig::None => Box::new(NoRewards),
        RewardConfig::Coins {
            value,
            fall_speed,
            collect_offset,
        } => Box::new(CoinRewards {
            value,
            fall_speed,
            collect_y: config.height - collect_offset,
        }),
    }
}

/// True when `kills` lands on a milestone. An interval of 0 never does.
pub fn is_milestone(kills: u32, interval: u32) -> bool {
    interval > 0 && kills > 0 && kills % interval == 0
}
