//! Control surface for a presentation layer.
//!
//! These functions bridge front-end requests to the game loop thread via
//! channels. Errors are plain strings meant for display.

use skyguard_core::commands::PlayerCommand;
use skyguard_core::state::GameStateSnapshot;
use skyguard_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())
        .map_err(|e| format!("Failed to spawn game loop: {}", e))?;

    *state.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
    *state.loop_thread.lock().map_err(|e| e.to_string())? = Some(handle);
    *running = true;

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // A loop that already exited has dropped its receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let handle = state.loop_thread.lock().map_err(|e| e.to_string())?.take();
    if let Some(handle) = handle {
        handle
            .join()
            .map_err(|_| "Game loop thread panicked".to_string())?;
    }
    *running = false;

    Ok(())
}
