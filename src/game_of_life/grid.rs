//! Grid representation and toroidal neighbor counting

use anyhow::Result;
use rayon::prelude::*;
use std::fmt;

/// A fixed-size Game of Life grid with toroidal adjacency (edges wrap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = cells.len();
        let width = cells[0].len();

        if width == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells: flat_cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell value at in-range coordinates
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.height && col < self.width);
        self.cells[self.index(row, col)]
    }

    /// Set cell value at in-range coordinates
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        debug_assert!(row < self.height && col < self.width);
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Count living cells among the 8 toroidal neighbors. Offset -1 wraps
    /// to `dimension - 1` and `dimension` wraps to 0, so corners see the
    /// opposite corners as diagonal neighbors.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let up = if row == 0 { self.height - 1 } else { row - 1 };
        let down = if row == self.height - 1 { 0 } else { row + 1 };
        let left = if col == 0 { self.width - 1 } else { col - 1 };
        let right = if col == self.width - 1 { 0 } else { col + 1 };

        let mut count = 0;
        for (r, c) in [
            (up, left),
            (up, col),
            (up, right),
            (row, left),
            (row, right),
            (down, left),
            (down, col),
            (down, right),
        ] {
            if self.cells[self.index(r, c)] {
                count += 1;
            }
        }
        count
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Parallel mutable row access for bulk recomputation.
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, bool> {
        self.cells.par_chunks_mut(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
