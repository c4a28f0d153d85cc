//! Food placement.

use super::types::{Cell, Grid};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Above this share of occupied cells (4/5), sample from the free-cell list
/// instead of rejection sampling.
const DENSE_NUMERATOR: usize = 4;
const DENSE_DENOMINATOR: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Pick a uniformly random cell that is not in `occupied`.
    ///
    /// Returns `None` when the board has no free cell left.
    pub fn place<R: Rng>(grid: Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Option<Food> {
        let total = grid.cell_count();
        let taken = occupied.iter().filter(|cell| grid.contains(**cell)).count();
        if taken >= total {
            return None;
        }

        let position = if taken * DENSE_DENOMINATOR > total * DENSE_NUMERATOR {
            let free: Vec<Cell> = grid.cells().filter(|cell| !occupied.contains(cell)).collect();
            *free.choose(rng)?
        } else {
            loop {
                let cell = Cell::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height));
                if !occupied.contains(&cell) {
                    break cell;
                }
            }
        };

        debug!("food placed at ({}, {})", position.x, position.y);
        Some(Food { position })
    }
}
