//! Adjacency resolution, including wrap-around through row/column edges.
//!
//! Two cells sharing a row (or column) are adjacent when every cell strictly
//! between them passes through, or — failing that — when the paths from each
//! of them out through the opposite edges of the row (or column) both pass
//! through. Only a live, unmarked empty slot blocks a walk; letters,
//! blackened cells and no-cells are all traversable. This models reading a
//! word across consumed cells, and across the board's edges on wrapping
//! puzzles.

use crate::{Board, Direction};

impl Board {
    /// Determine whether cell `a` is adjacent to cell `b`, both given as
    /// (row, col). Returns the direction of travel from `b` to `a`, or `None`
    /// when the two cells are disconnected.
    ///
    /// The two positions are expected to be distinct cells of the board; the
    /// state machine never compares a cell with itself.
    pub fn adjacent(&self, a: (usize, usize), b: (usize, usize)) -> Option<Direction> {
        let (a_row, a_col) = a;
        let (b_row, b_col) = b;

        if a_row == b_row {
            if self.row_walk_clear(a_row, a_col, b_col) {
                return Some(if a_col > b_col {
                    Direction::Right
                } else {
                    Direction::Left
                });
            }
            if self.row_walk_clear_wrapped(a_row, a_col, b_col) {
                // travelling out through the edge flips the apparent direction
                return Some(if a_col < b_col {
                    Direction::Right
                } else {
                    Direction::Left
                });
            }
        }

        if a_col == b_col {
            if self.col_walk_clear(a_col, a_row, b_row) {
                return Some(if a_row > b_row {
                    Direction::Down
                } else {
                    Direction::Up
                });
            }
            if self.col_walk_clear_wrapped(a_col, a_row, b_row) {
                return Some(if a_row < b_row {
                    Direction::Down
                } else {
                    Direction::Up
                });
            }
        }

        None
    }

    /// Direct walk along a row: the interior strictly between the two columns
    /// must not contain a blocking cell.
    fn row_walk_clear(&self, row: usize, c1: usize, c2: usize) -> bool {
        let (lo, hi) = (c1.min(c2), c1.max(c2));
        self.row_clear(row, lo + 1..hi)
    }

    /// Wrapped walk along a row: from the left cell out through the row start
    /// and from the right cell out past `max_col`, both interiors clear.
    fn row_walk_clear_wrapped(&self, row: usize, c1: usize, c2: usize) -> bool {
        let (lo, hi) = (c1.min(c2), c1.max(c2));
        self.row_clear(row, 0..lo) && self.row_clear(row, hi + 1..=self.max_col())
    }

    fn col_walk_clear(&self, col: usize, r1: usize, r2: usize) -> bool {
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        self.col_clear(col, lo + 1..hi)
    }

    fn col_walk_clear_wrapped(&self, col: usize, r1: usize, r2: usize) -> bool {
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        self.col_clear(col, 0..lo) && self.col_clear(col, hi + 1..=self.max_row())
    }

    // Positions absent from a short row pass through: the walks never index
    // past a row's actual length.
    fn row_clear(&self, row: usize, cols: impl Iterator<Item = usize>) -> bool {
        self.clear(cols.map(|col| (row, col)))
    }

    fn col_clear(&self, col: usize, rows: impl Iterator<Item = usize>) -> bool {
        self.clear(rows.map(|row| (row, col)))
    }

    fn clear(&self, positions: impl Iterator<Item = (usize, usize)>) -> bool {
        positions.into_iter().all(|(row, col)| {
            self.get(row, col)
                .is_none_or(|cell| !cell.blocks_path())
        })
    }
}
