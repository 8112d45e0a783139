//! Frame-rendering loop

use super::status::SimulationStatus;
use super::world::SharedWorldState;
use crate::utils::display::FrameFormatter;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

/// Accepts a finished frame of text. Implementations reposition the cursor
/// (or otherwise reset their canvas) before drawing, and are expected to be
/// fast relative to the refresh cadence.
pub trait DisplaySink {
    fn present(&mut self, frame: &str) -> Result<()>;
}

/// Renders grid snapshots to a display sink at a fixed refresh cadence.
///
/// The cadence is deliberately faster than the slowest simulation speed, so
/// the same generation is commonly rendered more than once.
pub struct Presenter {
    world: Arc<SharedWorldState>,
    status: Arc<SimulationStatus>,
    sink: Box<dyn DisplaySink + Send>,
    formatter: FrameFormatter,
    refresh_interval: Duration,
}

impl Presenter {
    pub fn new(
        world: Arc<SharedWorldState>,
        status: Arc<SimulationStatus>,
        sink: Box<dyn DisplaySink + Send>,
        formatter: FrameFormatter,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            world,
            status,
            sink,
            formatter,
            refresh_interval,
        }
    }

    /// Run until the stop flag is observed: snapshot, format, present,
    /// sleep. Sink failures end the run.
    pub fn run(&mut self) -> Result<()> {
        while self.status.is_enabled() {
            let snapshot = self.world.snapshot();
            let frame = self.formatter.format(&snapshot, &self.status);
            self.sink.present(&frame)?;

            std::thread::sleep(self.refresh_interval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::game_of_life::Grid;
    use parking_lot::Mutex;

    /// Test sink that records every presented frame.
    #[derive(Clone, Default)]
    struct CollectingSink {
        frames: Arc<Mutex<Vec<String>>>,
    }

    impl DisplaySink for CollectingSink {
        fn present(&mut self, frame: &str) -> Result<()> {
            self.frames.lock().push(frame.to_string());
            Ok(())
        }
    }

    fn test_formatter() -> FrameFormatter {
        let display = DisplayConfig {
            refresh_interval_ms: 1,
            alive_glyph: "##".to_string(),
            dead_glyph: "..".to_string(),
        };
        FrameFormatter::new(&display, 0.5)
    }

    #[test]
    fn test_presenter_renders_until_stopped() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true);
        let world = Arc::new(SharedWorldState::new(grid));
        let status = Arc::new(SimulationStatus::new(7, 1));

        let sink = CollectingSink::default();
        let frames = Arc::clone(&sink.frames);

        let handle = {
            let mut presenter = Presenter::new(
                Arc::clone(&world),
                Arc::clone(&status),
                Box::new(sink),
                test_formatter(),
                Duration::from_millis(1),
            );
            std::thread::spawn(move || presenter.run())
        };

        std::thread::sleep(Duration::from_millis(50));
        status.request_stop();
        handle.join().unwrap().unwrap();

        let frames = frames.lock();
        assert!(!frames.is_empty(), "presenter never rendered");
        // Every frame shows the same un-advanced generation.
        assert!(frames.iter().all(|f| f.contains("##")));
        assert!(frames[0].contains("Seed: 7"));
    }

    #[test]
    fn test_sink_error_ends_run() {
        struct FailingSink;

        impl DisplaySink for FailingSink {
            fn present(&mut self, _frame: &str) -> Result<()> {
                anyhow::bail!("display gone")
            }
        }

        let world = Arc::new(SharedWorldState::new(Grid::new(2, 2)));
        let status = Arc::new(SimulationStatus::new(0, 1));
        let mut presenter = Presenter::new(
            world,
            status,
            Box::new(FailingSink),
            test_formatter(),
            Duration::from_millis(1),
        );

        assert!(presenter.run().is_err());
    }
}
