//! Game of Life rules implementation

use super::Grid;
use rayon::prelude::*;

/// Pure rule engine for toroidal Game of Life evolution
pub struct LifeRules;

impl LifeRules {
    /// Compute the next-generation state of one cell from its 8 toroidal
    /// neighbors. Pure and total for in-range coordinates.
    pub fn next_state(grid: &Grid, row: usize, col: usize) -> bool {
        let neighbors = grid.count_neighbors(row, col);
        Self::next_cell_state(grid.get(row, col), neighbors)
    }

    /// The rule table: 3 neighbors is birth, 2 is stasis, anything else
    /// is death.
    pub fn next_cell_state(current: bool, neighbors: u8) -> bool {
        match neighbors {
            3 => true,
            2 => current,
            _ => false,
        }
    }

    /// Recompute every cell of `src` into the preallocated `dst` buffer,
    /// one rayon task per row. Dimensions of both grids must match.
    pub fn evolve_into(src: &Grid, dst: &mut Grid) {
        debug_assert_eq!(src.width(), dst.width());
        debug_assert_eq!(src.height(), dst.height());

        dst.par_rows_mut().enumerate().for_each(|(row, out_row)| {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = Self::next_state(src, row, col);
            }
        });
    }

    /// Evolve a grid for multiple generations, returning the final state
    pub fn evolve_generations(grid: &Grid, generations: usize) -> Grid {
        let mut current = grid.clone();
        let mut next = Grid::new(grid.width(), grid.height());
        for _ in 0..generations {
            Self::evolve_into(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        current
    }
}
