//! Application state shared between the control surface and the loop threads.

use std::sync::atomic::AtomicU32;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skyguard_core::commands::PlayerCommand;
use skyguard_core::state::GameStateSnapshot;

/// Commands sent from the control surface to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` sits in a `Mutex` because it is not `Sync`
/// - `Option` covers state that does not exist before `start_simulation`
/// - the latest snapshot is an `Arc` so the loop thread and the cooldown
///   poll can both see it
pub struct AppState {
    /// `None` until `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whole seconds until the special ability is ready, from the coarse poll.
    pub ability_ready_in: Arc<AtomicU32>,
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            ability_ready_in: Arc::new(AtomicU32::new(0)),
            loop_thread: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
