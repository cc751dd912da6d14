//! Coarse cooldown readout, polled on its own timer.
//!
//! Runs independently of the frame loop and only reads the latest published
//! snapshot, so it can lag a tick or two without affecting the simulation.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use skyguard_core::state::GameStateSnapshot;

pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Background poll that mirrors the ability cooldown into an atomic readout.
pub struct CooldownPoller {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CooldownPoller {
    /// Start polling `latest_snapshot` every `interval`. `on_change` is called
    /// with the new whole-second value whenever it changes.
    pub fn start<F>(
        latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
        readout: Arc<AtomicU32>,
        interval: Duration,
        mut on_change: F,
    ) -> io::Result<Self>
    where
        F: FnMut(u32) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let handle = std::thread::Builder::new()
            .name("skyguard-cooldown".into())
            .spawn(move || {
                let mut last = None;
                while !stop_flag.load(Ordering::Relaxed) {
                    let secs = latest_snapshot
                        .lock()
                        .ok()
                        .and_then(|lock| lock.as_ref().map(|s| s.ability.cooldown_remaining_secs));
                    if let Some(secs) = secs {
                        readout.store(secs, Ordering::Relaxed);
                        if last != Some(secs) {
                            on_change(secs);
                            last = Some(secs);
                        }
                    }
                    std::thread::sleep(interval);
                }
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    pub fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("cooldown poll thread panicked");
            }
        }
    }
}

impl Drop for CooldownPoller {
    fn drop(&mut self) {
        self.halt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_poller_reports_changes() {
        let slot = Arc::new(Mutex::new(None::<GameStateSnapshot>));
        let readout = Arc::new(AtomicU32::new(0));
        let (tx, rx) = mpsc::channel();

        let poller = CooldownPoller::start(slot.clone(), readout.clone(), Duration::from_millis(5), move |secs| {
            let _ = tx.send(secs);
        })
        .unwrap();

        let mut snap = GameStateSnapshot::default();
        snap.ability.cooldown_remaining_secs = 12;
        *slot.lock().unwrap() = Some(snap);

        assert_eq!(rx.recv_timeout(Duration::from_secs(1)).unwrap(), 12);
        assert_eq!(readout.load(Ordering::Relaxed), 12);
        poller.stop();
    }
}
