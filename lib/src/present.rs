//! What a presentation layer sees of the simulation.

use crate::{
    cells::{in_bounds, Coord},
    controller::Status,
    rules::Life,
};
use educe::Educe;
use std::{
    collections::HashSet,
    fmt::Write as _,
    io::{self, Write},
};

/// A read-only view of one generation.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    cells: &'a HashSet<Coord>,
    generation: u64,
    rows: usize,
    cols: usize,
    rule: &'a Life,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(
        cells: &'a HashSet<Coord>,
        generation: u64,
        rows: usize,
        cols: usize,
        rule: &'a Life,
    ) -> Self {
        Snapshot {
            cells,
            generation,
            rows,
            cols,
            rule,
        }
    }

    /// Coordinates of all living cells.
    pub fn live_cells(&self) -> &'a HashSet<Coord> {
        self.cells
    }

    /// The generation this snapshot was taken at.
    pub fn generation(&self) -> u64 {
        self.generation
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
    pub fn rule(&self) -> &'a Life {
        self.rule
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cell is alive. Cells outside the grid are dead.
    pub fn is_alive(&self, coord: Coord) -> bool {
        in_bounds(coord, self.rows, self.cols) && self.cells.contains(&coord)
    }

    /// Displays the whole world in a mix of
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) and
    /// [RLE](https://conwaylife.com/wiki/Rle) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`;
    /// * Each line is ended with `$`;
    /// * The whole pattern is ended with `!`.
    ///
    /// Rows of the grid are printed as the `x`-coordinate, so each line of
    /// the output is one column of the grid.
    pub fn rle(&self) -> String {
        let mut str = String::new();
        // Writing to a `String` never fails.
        let _ = writeln!(
            str,
            "x = {}, y = {}, rule = {}",
            self.rows, self.cols, self.rule
        );
        for col in 0..self.cols {
            self.push_line(&mut str, col);
            if col == self.cols - 1 {
                str.push('!')
            } else {
                str.push('$')
            };
            str.push('\n');
        }
        str
    }

    /// Displays the whole world in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        let mut str = String::new();
        for col in 0..self.cols {
            self.push_line(&mut str, col);
            str.push('\n');
        }
        str
    }

    fn push_line(&self, str: &mut String, col: usize) {
        for row in 0..self.rows {
            if self.cells.contains(&(row, col)) {
                str.push('o');
            } else {
                str.push('.');
            }
        }
    }
}

/// Something that shows a generation to the user.
///
/// Called after every new generation, and whenever the presentation
/// needs a redraw.
pub trait Presenter {
    /// Shows one generation.
    fn present(&mut self, snapshot: Snapshot<'_>, status: Status) -> io::Result<()>;
}

/// Output formats of a [`TextPresenter`].
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
pub enum TextFormat {
    /// See [`Snapshot::plaintext`].
    Plaintext,
    /// See [`Snapshot::rle`].
    #[educe(Default)]
    Rle,
}

/// Writes every presented generation to a writer as text.
#[derive(Debug)]
pub struct TextPresenter<W: Write> {
    writer: W,
    format: TextFormat,
}

impl<W: Write> TextPresenter<W> {
    /// Creates a presenter writing to `writer` in the given format.
    pub fn new(writer: W, format: TextFormat) -> Self {
        TextPresenter { writer, format }
    }

    /// Gets back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, snapshot: Snapshot<'_>, _status: Status) -> io::Result<()> {
        let text = match self.format {
            TextFormat::Plaintext => snapshot.plaintext(),
            TextFormat::Rle => snapshot.rle(),
        };
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}
