//! Concurrent simulation engine: shared state plus the three loops
//! (simulator, presenter, controller) and their orchestration.

pub mod controller;
pub mod generator;
pub mod presenter;
pub mod simulator;
pub mod status;
pub mod world;

pub use controller::{ControlEvent, Controller, InputSource};
pub use generator::{EntropySource, OsEntropy, WorldGenerator};
pub use presenter::{DisplaySink, Presenter};
pub use simulator::Simulator;
pub use status::SimulationStatus;
pub use world::SharedWorldState;

use crate::config::Settings;
use crate::utils::FrameFormatter;
use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use std::time::Duration;

/// Outcome of a completed run, reported once the loops have shut down.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub seed: u64,
    pub iterations: u64,
}

/// Run the full simulation: generate the world, spawn the simulator and
/// presenter threads, drive the controller on the calling thread, then
/// join both workers once the stop flag is observed.
pub fn run(
    settings: &Settings,
    seed_override: Option<u64>,
    sink: Box<dyn DisplaySink + Send>,
    input: Box<dyn InputSource>,
) -> Result<RunSummary> {
    let (grid, seed) = match seed_override {
        Some(seed) => (
            WorldGenerator::generate_with_seed(
                settings.grid.width,
                settings.grid.height,
                settings.grid.density,
                seed,
            ),
            seed,
        ),
        None => WorldGenerator::generate(
            settings.grid.width,
            settings.grid.height,
            settings.grid.density,
            &mut OsEntropy,
        )
        .context("Failed to generate the initial world")?,
    };

    let world = Arc::new(SharedWorldState::new(grid));
    let status = Arc::new(SimulationStatus::new(
        seed,
        settings.simulation.initial_speed,
    ));

    let simulator = Simulator::new(Arc::clone(&world), Arc::clone(&status));
    let simulator_handle = std::thread::Builder::new()
        .name("simulator".to_string())
        .spawn(move || simulator.run())
        .context("Failed to spawn simulator thread")?;

    let formatter = FrameFormatter::new(&settings.display, settings.grid.density);
    let mut presenter = Presenter::new(
        Arc::clone(&world),
        Arc::clone(&status),
        sink,
        formatter,
        Duration::from_millis(settings.display.refresh_interval_ms),
    );
    let presenter_handle = std::thread::Builder::new()
        .name("presenter".to_string())
        .spawn({
            let status = Arc::clone(&status);
            move || {
                let result = presenter.run();
                // A failed sink must stop the whole run, not just this loop.
                status.request_stop();
                result
            }
        })
        .context("Failed to spawn presenter thread")?;

    let mut controller = Controller::new(
        Arc::clone(&status),
        input,
        Duration::from_millis(settings.input.debounce_ms),
    );
    let controller_result = controller.run();

    // If the controller exited on an error the workers still need the flag.
    status.request_stop();

    simulator_handle
        .join()
        .map_err(|_| anyhow!("Simulator thread panicked"))?;
    presenter_handle
        .join()
        .map_err(|_| anyhow!("Presenter thread panicked"))?
        .context("Presenter failed")?;
    controller_result.context("Controller failed")?;

    Ok(RunSummary {
        seed,
        iterations: status.iteration(),
    })
}
