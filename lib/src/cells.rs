//! Cells in the cellular automaton.

/// The coordinates of a cell.
///
/// `(row, column)`. Both coordinates are 0-indexed.
///
/// Rows run along the width of the grid and columns along the height,
/// so `row` is the x-coordinate and `column` the y-coordinate.
pub type Coord = (usize, usize);

/// Offsets of the eight cells in the neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The neighbors of a cell in a grid with `rows` rows and `cols` columns.
///
/// The grid does not wrap around, so a cell on an edge has 5 neighbors,
/// and a cell at a corner has 3.
pub fn neighbors(coord: Coord, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
    let (row, col) = coord;
    NBHD.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}

/// Whether the coordinates are inside a grid with `rows` rows and `cols` columns.
#[inline]
pub fn in_bounds(coord: Coord, rows: usize, cols: usize) -> bool {
    coord.0 < rows && coord.1 < cols
}
