//! Generation-advancing simulation loop

use super::status::SimulationStatus;
use super::world::SharedWorldState;
use std::sync::Arc;
use std::time::Duration;

/// Drives generation advancement at `1000 / speed` milliseconds per tick.
pub struct Simulator {
    world: Arc<SharedWorldState>,
    status: Arc<SimulationStatus>,
}

impl Simulator {
    pub fn new(world: Arc<SharedWorldState>, status: Arc<SimulationStatus>) -> Self {
        Self { world, status }
    }

    /// Run until the stop flag is observed. Each iteration advances one
    /// generation, records its duration, then sleeps according to the
    /// current speed. The speed is re-read every iteration so a change
    /// takes effect on the next tick.
    pub fn run(&self) {
        while self.status.is_enabled() {
            let elapsed = self.world.advance_generation();
            self.status.record_generation(elapsed);

            let speed = self.status.speed();
            std::thread::sleep(Duration::from_millis(1000 / u64::from(speed)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Grid;

    #[test]
    fn test_simulator_advances_and_stops() {
        let world = Arc::new(SharedWorldState::new(Grid::new(8, 8)));
        let status = Arc::new(SimulationStatus::new(0, 1000));

        let handle = {
            let simulator = Simulator::new(Arc::clone(&world), Arc::clone(&status));
            std::thread::spawn(move || simulator.run())
        };

        // At ~1ms per tick a few iterations complete quickly.
        std::thread::sleep(Duration::from_millis(100));
        status.request_stop();
        handle.join().unwrap();

        let iterations = status.iteration();
        assert!(iterations > 0, "simulator never advanced");

        // Terminal state: no further advancement after stop.
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(status.iteration(), iterations);
    }

    #[test]
    fn test_speed_change_applies_next_tick() {
        let world = Arc::new(SharedWorldState::new(Grid::new(4, 4)));
        let status = Arc::new(SimulationStatus::new(0, 1));

        // Bump the speed before starting: the first sleep must already use
        // the fresh value rather than a cached one.
        for _ in 0..199 {
            status.speed_up();
        }
        assert_eq!(status.speed(), 200);

        let handle = {
            let simulator = Simulator::new(Arc::clone(&world), Arc::clone(&status));
            std::thread::spawn(move || simulator.run())
        };

        std::thread::sleep(Duration::from_millis(100));
        status.request_stop();
        handle.join().unwrap();

        // 5ms ticks over ~100ms: with a cached speed of 1 at most a single
        // generation would have completed.
        assert!(status.iteration() >= 2);
    }
}
