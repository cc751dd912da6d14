//! Headless SKYGUARD session.
//!
//! Usage: `skyguard-app [CONFIG.json] [SEED]`
//!
//! Plays one session with the autopilot in real time and logs a JSON summary.
//! Set `RUST_LOG=debug` to see spawns and rejected commands.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use skyguard_app::autopilot::Autopilot;
use skyguard_app::control;
use skyguard_app::cooldown::{self, CooldownPoller};
use skyguard_app::state::AppState;
use skyguard_app::summary::SessionSummary;
use skyguard_core::config::GameConfig;
use skyguard_core::state::GameStateSnapshot;
use skyguard_sim::engine::SimConfig;

/// How often the autopilot looks at the board.
const DECISION_INTERVAL: Duration = Duration::from_millis(150);

/// Wall-clock cap on a session.
const MAX_SESSION: Duration = Duration::from_secs(15 * 60);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let game = match args.next() {
        Some(path) => match GameConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("could not load config {path}: {err}");
                return ExitCode::from(2);
            }
        },
        None => GameConfig::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            log::error!("invalid seed: {err}");
            return ExitCode::from(2);
        }
        None => SimConfig::default().seed,
    };

    match play(SimConfig { seed, game }) {
        Ok(summary) => {
            match serde_json::to_string(&summary) {
                Ok(json) => log::info!("session summary: {json}"),
                Err(err) => log::error!("could not encode summary: {err}"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn play(config: SimConfig) -> Result<SessionSummary, String> {
    log::info!("starting session with seed {}", config.seed);
    let state = AppState::new();
    control::start_simulation(&state, config)?;

    let poller = CooldownPoller::start(
        state.latest_snapshot.clone(),
        state.ability_ready_in.clone(),
        cooldown::POLL_INTERVAL,
        |secs| {
            if secs == 0 {
                log::info!("ability ready");
            } else if secs % 10 == 0 {
                log::info!("ability ready in {secs}s");
            }
        },
    )
    .map_err(|e| format!("Failed to start cooldown poll: {}", e))?;

    let pilot = Autopilot::default();
    control::send_command(&state, skyguard_core::commands::PlayerCommand::StartGame)?;

    let started = Instant::now();
    let mut last: Option<GameStateSnapshot> = None;
    while started.elapsed() < MAX_SESSION {
        std::thread::sleep(DECISION_INTERVAL);
        let Some(snapshot) = control::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.phase.is_terminal() {
            last = Some(snapshot);
            break;
        }
        if let Some(command) = pilot.decide(&snapshot) {
            control::send_command(&state, command)?;
        }
        last = Some(snapshot);
    }

    poller.stop();
    control::stop_simulation(&state)?;

    let snapshot = last.ok_or_else(|| "No snapshot was ever published".to_string())?;
    if !snapshot.phase.is_terminal() {
        log::warn!("session cut off after {:?}", MAX_SESSION);
    }
    Ok(SessionSummary::from(&snapshot))
}
