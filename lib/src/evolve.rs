//! Computes the next generation.

use crate::{
    cells::{neighbors, Coord},
    rules::Life,
};
use std::collections::{HashMap, HashSet};

/// Applies Conway's Game of Life (`B3/S23`) to the living cells once.
///
/// A cell is alive in the next generation if it has exactly 3 living
/// neighbors, or if it is alive and has exactly 2 living neighbors.
///
/// The grid has `rows` rows and `cols` columns and does not wrap around.
/// This is a pure function; the generation counter is not its business.
pub fn advance(live: &HashSet<Coord>, rows: usize, cols: usize) -> HashSet<Coord> {
    advance_with_rule(live, rows, cols, &Life::conway())
}

/// Applies a Life-like rule to the living cells once.
///
/// Only the neighborhoods of living cells are visited, so the cost is
/// proportional to the population rather than to the area of the grid.
/// Dead cells without living neighbors are never looked at, which is why
/// `B0` rules cannot be used here.
pub fn advance_with_rule(
    live: &HashSet<Coord>,
    rows: usize,
    cols: usize,
    rule: &Life,
) -> HashSet<Coord> {
    let mut counts: HashMap<Coord, usize> = HashMap::with_capacity(live.len() * 8);
    for &coord in live {
        for neigh in neighbors(coord, rows, cols) {
            *counts.entry(neigh).or_insert(0) += 1;
        }
    }

    let mut next: HashSet<Coord> = counts
        .iter()
        .filter(|&(coord, &count)| rule.next_state(live.contains(coord), count))
        .map(|(&coord, _)| coord)
        .collect();

    // Living cells without living neighbors are not in `counts`.
    if rule.next_state(true, 0) {
        next.extend(live.iter().filter(|coord| !counts.contains_key(*coord)));
    }
    next
}
