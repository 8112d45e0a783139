//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Probability in (0, 1] that a cell starts alive.
    pub density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generations per second, floor of 1. The simulator sleeps
    /// `1000 / speed` milliseconds between generations.
    pub initial_speed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Presenter refresh cadence. Kept well below the slowest simulation
    /// cadence so speed changes show up promptly.
    pub refresh_interval_ms: u64,
    pub alive_glyph: String,
    pub dead_glyph: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Minimum spacing between accepted speed-change events of the same
    /// kind. Quit is never debounced.
    pub debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 20,
                height: 20,
                density: 0.2,
            },
            simulation: SimulationConfig { initial_speed: 1 },
            display: DisplayConfig {
                refresh_interval_ms: 16,
                alive_glyph: "██".to_string(),
                dead_glyph: "··".to_string(),
            },
            input: InputConfig { debounce_ms: 100 },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if self.grid.density <= 0.0 || self.grid.density > 1.0 {
            anyhow::bail!("Density must be in (0, 1], got {}", self.grid.density);
        }

        if self.simulation.initial_speed == 0 {
            anyhow::bail!("Initial speed must be at least 1");
        }

        if self.display.refresh_interval_ms == 0 {
            anyhow::bail!("Display refresh interval must be positive");
        }

        if self.display.alive_glyph.is_empty() || self.display.dead_glyph.is_empty() {
            anyhow::bail!("Cell glyphs cannot be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(density) = cli_overrides.density {
            self.grid.density = density;
        }
        if let Some(speed) = cli_overrides.speed {
            self.simulation.initial_speed = speed;
        }
        if let Some(refresh) = cli_overrides.refresh_interval_ms {
            self.display.refresh_interval_ms = refresh;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub density: Option<f64>,
    pub speed: Option<u32>,
    pub refresh_interval_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid.width, 20);
        assert_eq!(settings.grid.height, 20);
        assert_eq!(settings.simulation.initial_speed, 1);
    }

    #[test]
    fn test_invalid_density_rejected() {
        let mut settings = Settings::default();
        settings.grid.density = 0.0;
        assert!(settings.validate().is_err());

        settings.grid.density = 1.5;
        assert!(settings.validate().is_err());

        settings.grid.density = 1.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_speed_rejected() {
        let mut settings = Settings::default();
        settings.simulation.initial_speed = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.grid.width = 40;
        settings.grid.density = 0.35;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.grid.width, 40);
        assert_eq!(loaded.grid.density, 0.35);
        assert_eq!(loaded.input.debounce_ms, settings.input.debounce_ms);
    }

    #[test]
    fn test_cli_override_merge() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            width: Some(50),
            speed: Some(4),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.grid.width, 50);
        assert_eq!(settings.simulation.initial_speed, 4);
        // Untouched fields keep their defaults
        assert_eq!(settings.grid.height, 20);
    }
}
