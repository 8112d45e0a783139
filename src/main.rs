//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, Settings},
    run_simulation,
    utils::ColorOutput,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Concurrent toroidal Game of Life terminal simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Initial alive-cell probability in (0, 1] (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// Initial speed in generations per second (overrides config)
        #[arg(short, long)]
        speed: Option<u32>,

        /// Display refresh interval in milliseconds (overrides config)
        #[arg(long)]
        refresh_ms: Option<u64>,

        /// Fixed seed for a reproducible world (otherwise OS entropy)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            density,
            speed,
            refresh_ms,
            seed,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                density,
                speed,
                refresh_interval_ms: refresh_ms,
            };
            run_command(config, overrides, seed)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, seed: Option<u64>) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    println!(
        "{}",
        ColorOutput::info("Starting simulation (Up/Down adjusts speed, q quits)")
    );

    let summary = run_simulation(&settings, seed).context("Simulation failed")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Simulation ended after {} generation(s), seed {}",
            summary.iterations, summary.seed
        ))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration files..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // A big, sparse, fast-refreshing world
    let mut large_config = Settings::default();
    large_config.grid.width = 60;
    large_config.grid.height = 30;
    large_config.grid.density = 0.1;
    large_config.to_file(&examples_dir.join("large.yaml"))?;

    // A small dense world that burns out quickly
    let mut dense_config = Settings::default();
    dense_config.grid.width = 10;
    dense_config.grid.height = 10;
    dense_config.grid.density = 0.8;
    dense_config.simulation.initial_speed = 4;
    dense_config.to_file(&examples_dir.join("dense.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
