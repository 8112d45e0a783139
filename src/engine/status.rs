//! Cross-loop simulation status shared by the simulator, presenter and
//! controller threads.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

/// Scalar simulation state, readable without taking the grid lock.
///
/// All fields are informational except `enabled`, which doubles as the
/// cancellation flag for every loop. Relaxed ordering is sufficient: the
/// status values are display-only and the loops tolerate observing the
/// stop flag one polling interval late.
#[derive(Debug)]
pub struct SimulationStatus {
    seed: u64,
    iteration: AtomicU64,
    speed: AtomicU32,
    last_update_micros: AtomicU64,
    enabled: AtomicBool,
}

impl SimulationStatus {
    pub fn new(seed: u64, initial_speed: u32) -> Self {
        Self {
            seed,
            iteration: AtomicU64::new(0),
            speed: AtomicU32::new(initial_speed.max(1)),
            last_update_micros: AtomicU64::new(0),
            enabled: AtomicBool::new(true),
        }
    }

    /// Seed used to generate the initial world, immutable for the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed generations.
    pub fn iteration(&self) -> u64 {
        self.iteration.load(Ordering::Relaxed)
    }

    /// Record one completed generation: bumps the iteration counter by
    /// exactly 1 and stores the time spent recomputing the grid.
    pub fn record_generation(&self, elapsed: Duration) {
        self.last_update_micros
            .store(elapsed.as_micros() as u64, Ordering::Relaxed);
        self.iteration.fetch_add(1, Ordering::Relaxed);
    }

    /// Wall-clock duration of the most recent full-grid recomputation.
    pub fn last_update(&self) -> Duration {
        Duration::from_micros(self.last_update_micros.load(Ordering::Relaxed))
    }

    /// Current speed in generations per second, always at least 1.
    pub fn speed(&self) -> u32 {
        self.speed.load(Ordering::Relaxed)
    }

    /// Increment speed, unbounded above.
    pub fn speed_up(&self) {
        self.speed.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrement speed unless it would drop below 1. Returns whether the
    /// speed actually changed.
    pub fn speed_down(&self) -> bool {
        self.speed
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                if current > 1 {
                    Some(current - 1)
                } else {
                    None
                }
            })
            .is_ok()
    }

    /// Whether the simulation is still running. Polled at the top of every
    /// loop iteration.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Request shutdown. Idempotent; the flag transitions true to false
    /// once and never back.
    pub fn request_stop(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }
}
