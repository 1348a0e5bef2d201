use crate::Cell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for board construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("puzzle text contains no cells")]
    EmptyPuzzle,
}

/// The puzzle grid: ordered rows of cells, possibly jagged.
///
/// Rows shorter than the widest row simply have fewer addressable columns;
/// those positions are never indexed. `max_row`/`max_col` bound the
/// wrap-around adjacency walks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    max_row: usize,
    max_col: usize,
}

impl Board {
    /// Parse raw puzzle text (newline-separated rows) into a board.
    ///
    /// Input is uppercased first, so puzzles may be typed in lowercase.
    /// Text with no cells at all is the one load-time error; malformed rows
    /// are tolerated structurally.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let text = text.to_uppercase();
        let cells: Vec<Vec<Cell>> = text
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| Cell::from_char(ch, col, row))
                    .collect()
            })
            .collect();

        let widest = cells.iter().map(|row| row.len()).max().unwrap_or(0);
        if widest == 0 {
            return Err(BoardError::EmptyPuzzle);
        }

        Ok(Self {
            max_row: cells.len() - 1,
            max_col: widest - 1,
            cells,
        })
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Last row index.
    pub fn max_row(&self) -> usize {
        self.max_row
    }

    /// Widest row length minus one.
    pub fn max_col(&self) -> usize {
        self.max_col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    pub fn set_blackened(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.set_blackened(true);
        }
    }

    pub fn set_being_marked(&mut self, row: usize, col: usize, being_marked: bool) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.set_being_marked(being_marked);
        }
    }

    /// Commit literal content into a cell, clearing its empty/marked flags.
    pub fn set_content(&mut self, row: usize, col: usize, content: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.set_content(content);
        }
    }

    /// Blacken every cell whose content equals `content`, board-wide.
    pub fn blacken_all_matching(&mut self, content: char) {
        for row in &mut self.cells {
            for cell in row {
                if cell.content() == content {
                    cell.set_blackened(true);
                }
            }
        }
    }

    /// Whether every cell is blackened or a no-cell.
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_done()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercases_and_maps() {
        let board = Board::parse("kol\n _").unwrap();
        assert_eq!(board.max_row(), 1);
        assert_eq!(board.max_col(), 2);
        assert_eq!(board.get(0, 1).unwrap().content(), 'O');
        assert!(board.get(1, 0).unwrap().is_no_cell());
        assert!(board.get(1, 1).unwrap().is_empty_cell());
        assert!(board.get(1, 2).is_none());
    }

    #[test]
    fn parse_rejects_empty_text() {
        assert_eq!(Board::parse(""), Err(BoardError::EmptyPuzzle));
        assert_eq!(Board::parse("\n\n"), Err(BoardError::EmptyPuzzle));
    }

    #[test]
    fn solved_requires_every_cell_done() {
        let mut board = Board::parse("K \n**").unwrap();
        assert!(!board.is_solved());
        board.set_blackened(0, 0);
        assert!(board.is_solved());
    }

    #[test]
    fn blacken_all_matching_is_board_wide() {
        let mut board = Board::parse("KOK\nOKO").unwrap();
        board.blacken_all_matching('K');
        assert!(board.get(0, 0).unwrap().is_blackened());
        assert!(board.get(1, 1).unwrap().is_blackened());
        assert!(!board.get(0, 1).unwrap().is_blackened());
    }

    #[test]
    fn mutations_out_of_bounds_are_noops() {
        let mut board = Board::parse("K").unwrap();
        board.set_blackened(5, 5);
        board.set_content(0, 9, 'Z');
        assert_eq!(board, Board::parse("K").unwrap());
    }
}
