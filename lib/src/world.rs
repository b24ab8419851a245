//! The world.

use crate::{
    cells::{in_bounds, Coord},
    evolve::advance_with_rule,
    present::Snapshot,
    rules::Life,
};
use std::collections::HashSet;

/// The world.
///
/// A finite grid whose living cells are stored as a set of coordinates,
/// together with the number of the current generation.
/// Dead cells are not stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,

    /// The rule of the cellular automaton.
    rule: Life,

    /// Coordinates of all living cells.
    ///
    /// All of them are inside the grid.
    cells: HashSet<Coord>,

    /// The current generation. Starts from `0`.
    generation: u64,
}

impl World {
    /// Creates a world in generation `0` with the given living cells.
    ///
    /// Cells outside the grid are dropped.
    pub fn new(rows: usize, cols: usize, rule: Life, cells: HashSet<Coord>) -> Self {
        let cells = cells
            .into_iter()
            .filter(|&coord| in_bounds(coord, rows, cols))
            .collect();
        World {
            rows,
            cols,
            rule,
            cells,
            generation: 0,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The rule of the cellular automaton.
    pub fn rule(&self) -> &Life {
        &self.rule
    }

    /// The current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Replaces the living cells by those of the next generation,
    /// and increments the generation counter.
    pub(crate) fn evolve(&mut self) {
        self.cells = advance_with_rule(&self.cells, self.rows, self.cols, &self.rule);
        self.generation += 1;
    }

    /// A read-only view of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.cells, self.generation, self.rows, self.cols, &self.rule)
    }
}
