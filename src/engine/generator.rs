//! Initial world generation from a seeded random stream

use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

/// Source of one seed value. Failure is fatal at startup.
pub trait EntropySource {
    fn seed(&mut self) -> Result<u64>;
}

/// Operating-system entropy via `OsRng`.
#[derive(Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn seed(&mut self) -> Result<u64> {
        let mut bytes = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .context("Failed to obtain a seed from the OS entropy source")?;
        Ok(u64::from_le_bytes(bytes))
    }
}

/// Produces the initial random grid
pub struct WorldGenerator;

impl WorldGenerator {
    /// Generate a `width` x `height` grid where each cell independently
    /// starts alive with probability `density`. The seed is obtained from
    /// `entropy` and returned alongside the grid for status display and
    /// reproducibility.
    pub fn generate(
        width: usize,
        height: usize,
        density: f64,
        entropy: &mut dyn EntropySource,
    ) -> Result<(Grid, u64)> {
        let seed = entropy.seed()?;
        Ok((Self::generate_with_seed(width, height, density, seed), seed))
    }

    /// Deterministic core: the same seed always yields the same grid.
    pub fn generate_with_seed(width: usize, height: usize, density: f64, seed: u64) -> Grid {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(width, height);
        for row in 0..height {
            for col in 0..width {
                grid.set(row, col, rng.gen::<f64>() < density);
            }
        }
        grid
    }
}
