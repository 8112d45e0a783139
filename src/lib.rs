//! Concurrent toroidal Game of Life simulator
//!
//! A double-buffered grid is advanced by a simulator thread while a
//! presenter thread renders snapshots to the terminal and a controller
//! loop applies speed and quit commands, all coordinated through one
//! grid mutex and a handful of shared atomics.

pub mod config;
pub mod engine;
pub mod game_of_life;
pub mod terminal;
pub mod utils;

pub use config::Settings;
pub use engine::RunSummary;

use anyhow::Result;

/// Run the simulation against the interactive terminal until the user
/// quits. Returns the seed and generation count of the finished run.
pub fn run_simulation(settings: &Settings, seed_override: Option<u64>) -> Result<RunSummary> {
    let sink = terminal::TerminalDisplay::new()?;
    let input = terminal::TerminalInput;
    engine::run(settings, seed_override, Box::new(sink), Box::new(input))
}
