//! Game loop thread: runs the simulation engine at a fixed 60 Hz and
//! publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via an `mpsc` channel and are applied at the next tick boundary.
//! Ticks are only scheduled while the session is playing; in any other
//! phase the thread parks on the channel until a command arrives, so there
//! is never more than one pending tick.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyguard_core::constants::{FRAME_MS, FRAME_RATE};
use skyguard_core::enums::GamePhase;
use skyguard_core::state::GameStateSnapshot;
use skyguard_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyguard-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// What the loop should do after draining the channel.
enum Drain {
    Continue,
    Stop,
}

fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> Drain {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return Drain::Stop,
            Err(mpsc::TryRecvError::Empty) => return Drain::Continue,
            Err(mpsc::TryRecvError::Disconnected) => return Drain::Stop,
        }
    }
}

/// Run one tick, surviving a panic inside the engine.
fn guarded_tick(engine: &mut SimulationEngine) -> GameStateSnapshot {
    match panic::catch_unwind(AssertUnwindSafe(|| engine.tick(FRAME_MS))) {
        Ok(snapshot) => snapshot,
        Err(_) => {
            log::error!("tick {} panicked; continuing", engine.time().tick);
            engine.snapshot()
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut scheduled = false;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Halted: block until someone sends something.
        if !scheduled {
            match cmd_rx.recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(_) => return,
            }
            next_tick_time = Instant::now();
        }

        // 2. Drain all pending commands
        if let Drain::Stop = drain_commands(&mut engine, &cmd_rx) {
            return;
        }

        // 3. Advance one tick
        let snapshot = guarded_tick(&mut engine);
        let was_scheduled = scheduled;
        scheduled = snapshot.phase == GamePhase::Playing;
        if was_scheduled && !scheduled {
            log::info!("loop halted in {:?}", snapshot.phase);
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        if scheduled {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}
