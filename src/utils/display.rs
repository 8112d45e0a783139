//! Frame and console output formatting utilities

use crate::config::DisplayConfig;
use crate::engine::status::SimulationStatus;
use crate::game_of_life::Grid;

/// Formats a grid snapshot plus status metadata into one text frame
pub struct FrameFormatter {
    alive_glyph: String,
    dead_glyph: String,
    density: f64,
}

impl FrameFormatter {
    pub fn new(display: &DisplayConfig, density: f64) -> Self {
        Self {
            alive_glyph: display.alive_glyph.clone(),
            dead_glyph: display.dead_glyph.clone(),
            density,
        }
    }

    /// One glyph pair per cell, one line per row, then a status line.
    pub fn format(&self, grid: &Grid, status: &SimulationStatus) -> String {
        let mut frame = String::with_capacity((grid.width() * 2 + 1) * (grid.height() + 2));

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                frame.push_str(if grid.get(row, col) {
                    &self.alive_glyph
                } else {
                    &self.dead_glyph
                });
            }
            frame.push('\n');
        }

        frame.push_str(&format!(
            "Seed: {}   Size: {}x{}   Density: {:.2}   Speed: {}   Iter: {}   Update time: {} ms\n",
            status.seed(),
            grid.width(),
            grid.height(),
            self.density,
            status.speed(),
            status.iteration(),
            status.last_update().as_millis(),
        ));

        frame
    }
}

/// Format console messages with color (if terminal supports it)
pub struct ColorOutput;

impl ColorOutput {
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(&self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
