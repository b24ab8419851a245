//! Chooses the first generation.

use crate::{cells::Coord, error::Error};
use rand::Rng;
use std::collections::HashSet;

/// Chooses `count` distinct cells uniformly at random in a grid with
/// `rows` rows and `cols` columns.
///
/// Returns an error before drawing anything if the grid has fewer than
/// `count` cells, since the set could never reach the requested size.
pub fn seed<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    count: usize,
    rng: &mut R,
) -> Result<HashSet<Coord>, Error> {
    let capacity = rows.saturating_mul(cols);
    if count > capacity {
        return Err(Error::SeedExceedsCapacity { count, capacity });
    }

    let mut cells = HashSet::with_capacity(count);
    while cells.len() < count {
        cells.insert((rng.gen_range(0..rows), rng.gen_range(0..cols)));
    }
    Ok(cells)
}
