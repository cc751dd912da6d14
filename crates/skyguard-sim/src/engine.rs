//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the entity store, applies player commands, runs
//! every system once per `tick(dt_ms)`, and produces `GameStateSnapshot`s.
//! It never reads a clock; callers pass elapsed time in, whether that is a
//! frame scheduler or a test driving synthetic steps.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skyguard_core::commands::PlayerCommand;
use skyguard_core::config::GameConfig;
use skyguard_core::enums::GamePhase;
use skyguard_core::events::GameEvent;
use skyguard_core::state::GameStateSnapshot;
use skyguard_core::types::{SimTime, Vec2};

use crate::error::SimError;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::blast::Kill;
use crate::systems::rewards::{self, RewardPolicy};
use crate::systems::snapshot::SessionView;
use crate::wave::{AbilityState, ScoreState, WaveState};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and commands = same session.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the entity store and all session state.
pub struct SimulationEngine {
    store: EntityStore,
    config: GameConfig,
    rng: ChaCha8Rng,
    time: SimTime,
    phase: GamePhase,
    wave: WaveState,
    score: ScoreState,
    ability: AbilityState,
    rewards: Box<dyn RewardPolicy>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        let mut store = EntityStore::new();
        world_setup::setup_session(&mut store, &config.game);
        Self {
            wave: WaveState::for_level(1, &config.game.wave),
            rewards: rewards::policy_for(&config.game),
            store,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.game,
            time: SimTime::default(),
            phase: GamePhase::default(),
            score: ScoreState::default(),
            ability: AbilityState::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command right now. Its effects are visible to the next tick.
    ///
    /// Commands that do not apply in the current phase are ignored.
    pub fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Launch { x, y } => {
                if self.phase != GamePhase::Playing {
                    log::debug!("launch ignored in {:?}", self.phase);
                    return;
                }
                match systems::input::launch(&mut self.store, &self.config, Vec2::new(x, y), &mut self.events) {
                    Ok(shots) => self.score.interceptors_fired += shots,
                    Err(err) => self.recover(err),
                }
            }
            PlayerCommand::UseAbility => {
                if self.phase != GamePhase::Playing {
                    log::debug!("ability ignored in {:?}", self.phase);
                    return;
                }
                let fired = systems::ability::try_fire(
                    &mut self.store,
                    &mut self.ability,
                    self.time.elapsed_ms,
                    &self.config,
                );
                match fired {
                    Ok(Some(kills)) => {
                        self.events.push(GameEvent::AbilityFired {
                            kills: kills.len() as u32,
                        });
                        self.credit_kills(&kills);
                    }
                    Ok(None) => {}
                    Err(err) => self.recover(err),
                }
            }
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::Win | GamePhase::Lose) {
                    self.start_session();
                }
            }
            PlayerCommand::AdvanceLevel => {
                if self.phase == GamePhase::Transition {
                    self.begin_level(self.wave.level + 1);
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(
                    self.phase,
                    GamePhase::Win | GamePhase::Lose | GamePhase::Transition
                ) {
                    self.set_phase(GamePhase::Menu);
                }
            }
        }
    }

    /// Advance the simulation by one tick of `dt_ms` and return the
    /// resulting snapshot. Outside `Playing` only commands are processed.
    pub fn tick(&mut self, dt_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.time.advance(dt_ms);
            if let Err(err) = self.run_systems(dt_ms) {
                self.recover(err);
            }
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Current state without advancing time or draining pending events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(self.events.clone())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn level(&self) -> u32 {
        self.wave.level
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Milliseconds until the special ability is ready again.
    pub fn ability_cooldown_ms(&self) -> f64 {
        self.ability
            .remaining_ms(self.time.elapsed_ms, &self.config.ability)
    }

    /// Swap what kills drop. Takes effect with the next kill; drops left
    /// by the previous policy are removed uncollected.
    pub fn set_reward_policy(&mut self, policy: Box<dyn RewardPolicy>) {
        let dropped = self.store.clear_coins();
        if dropped > 0 {
            log::debug!("reward policy swapped, {dropped} coins removed");
        }
        self.rewards = policy;
    }

    /// Direct store access for tests that stage exact layouts.
    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[cfg(test)]
    pub fn wave_mut(&mut self) -> &mut WaveState {
        &mut self.wave
    }

    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn run_systems(&mut self, dt_ms: f64) -> Result<(), SimError> {
        systems::spawner::run(
            &mut self.store,
            &mut self.rng,
            &mut self.wave,
            &self.config,
            dt_ms,
            &mut self.events,
        );

        let hostiles = systems::kinematics::advance_hostiles(&mut self.store, &self.config, &mut self.events)?;
        self.score.impacts += hostiles.detonated;
        let interceptors =
            systems::kinematics::advance_interceptors(&mut self.store, &self.config, &mut self.events)?;
        for fault in hostiles.faults.into_iter().chain(interceptors.faults) {
            self.recover(fault);
        }

        let kills = systems::blast::run(&mut self.store, &self.config)?;
        self.credit_kills(&kills);

        let collected = self.rewards.update(&mut self.store)?;
        if collected > 0 {
            self.score.add_currency(collected);
            self.events.push(GameEvent::CurrencyCollected {
                amount: collected,
                total: self.score.currency,
            });
        }

        if let Some(next) = systems::outcome::evaluate(&self.store, &self.score, &self.wave, &self.config) {
            self.set_phase(next);
        }
        Ok(())
    }

    /// Score, reward drops and milestone events for a batch of kills.
    fn credit_kills(&mut self, kills: &[Kill]) {
        for kill in kills {
            self.score.add_score(self.config.score_per_kill);
            let total = self.score.record_kill();
            self.rewards.on_kill(&mut self.store, kill.at);
            self.events.push(GameEvent::HostileKilled {
                id: kill.hostile,
                at: kill.at,
            });
            if rewards::is_milestone(total, self.config.kill_milestone_interval) {
                log::debug!("kill milestone: {total}");
                self.events.push(GameEvent::KillMilestone { kills: total });
            }
        }
    }

    /// Log a failed update, drop whatever entity caused it, and carry on.
    fn recover(&mut self, err: SimError) {
        log::error!("tick {} failed: {err}", self.time.tick);
        if let Some(entity) = err.culprit() {
            if self.store.world_mut().despawn(entity).is_ok() {
                log::warn!("removed faulty entity {entity:?}");
            }
        }
        self.events.push(GameEvent::TickFault {
            tick: self.time.tick,
            message: err.to_string(),
        });
    }

    /// Full reset: fresh field, zeroed score and clock, level 1.
    fn start_session(&mut self) {
        world_setup::setup_session(&mut self.store, &self.config);
        self.score = ScoreState::default();
        self.ability = AbilityState::default();
        self.time = SimTime::default();
        self.begin_level(1);
    }

    fn begin_level(&mut self, level: u32) {
        self.wave = world_setup::start_level(&mut self.store, &self.config, level);
        log::info!(
            "level {level}: {} hostiles, one every {:.0} ms",
            self.wave.quota,
            self.wave.interval_ms
        );
        self.set_phase(GamePhase::Playing);
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::info!("phase {from:?} -> {to:?} at level {}", self.wave.level);
        self.events.push(GameEvent::PhaseChanged {
            from,
            to,
            level: self.wave.level,
        });
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.store,
            SessionView {
                time: self.time,
                phase: self.phase,
                wave: &self.wave,
                score: &self.score,
                ability: &self.ability,
                config: &self.config,
            },
            events,
        )
    }
}
