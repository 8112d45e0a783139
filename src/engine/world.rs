//! Double-buffered shared world state

use crate::game_of_life::{Grid, LifeRules};
use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Which of the two buffers currently holds the completed generation.
#[derive(Debug)]
struct Buffers {
    grids: [Grid; 2],
    active: usize,
}

/// The shared grid: two preallocated buffers whose roles flip under a
/// single mutex. The active buffer always holds one complete generation;
/// the other is the scratch basis/target for the next recomputation.
///
/// The lock is held only for the duration of a copy or a recomputation,
/// never across a sleep.
#[derive(Debug)]
pub struct SharedWorldState {
    inner: Mutex<Buffers>,
}

impl SharedWorldState {
    pub fn new(initial: Grid) -> Self {
        let scratch = initial.clone();
        Self {
            inner: Mutex::new(Buffers {
                grids: [initial, scratch],
                active: 0,
            }),
        }
    }

    /// Copy the last completed generation. The copy is always internally
    /// consistent: it can never mix cells from two generations.
    pub fn snapshot(&self) -> Grid {
        let guard = self.inner.lock();
        guard.grids[guard.active].clone()
    }

    /// Advance one generation: flip buffer roles, recompute every cell from
    /// the old active buffer into the new one, and return the wall-clock
    /// time spent under the lock.
    pub fn advance_generation(&self) -> Duration {
        let mut guard = self.inner.lock();
        let start = Instant::now();

        let next = 1 - guard.active;
        let (left, right) = guard.grids.split_at_mut(1);
        let (src, dst) = if next == 1 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        };
        LifeRules::evolve_into(src, dst);
        guard.active = next;

        start.elapsed()
    }
}
