use serde::{Deserialize, Serialize};

/// The wildcard letter: joins a word without being blackened or spelled.
pub const WILDCARD: char = 'X';

/// A single grid position, created from one character of puzzle text.
///
/// Source character mapping:
/// - `*` is pre-blackened
/// - `_` is a markable empty slot (content becomes blank)
/// - ` ` is not part of the puzzle at all
/// - anything else is a literal letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    content: char,
    col: usize,
    row: usize,
    blackened: bool,
    empty_cell: bool,
    being_marked: bool,
    no_cell: bool,
}

impl Cell {
    pub fn from_char(content: char, col: usize, row: usize) -> Self {
        let mut cell = Self {
            content,
            col,
            row,
            blackened: false,
            empty_cell: false,
            being_marked: false,
            no_cell: content == ' ',
        };
        match content {
            '*' => cell.blackened = true,
            '_' => {
                cell.content = ' ';
                cell.empty_cell = true;
            }
            _ => {}
        }
        cell
    }

    pub fn content(&self) -> char {
        self.content
    }

    /// Zero-based (column, row) position, fixed at creation.
    pub fn position(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    pub fn is_blackened(&self) -> bool {
        self.blackened
    }

    pub fn is_empty_cell(&self) -> bool {
        self.empty_cell
    }

    pub fn is_being_marked(&self) -> bool {
        self.being_marked
    }

    pub fn is_no_cell(&self) -> bool {
        self.no_cell
    }

    /// Whether a click on this cell is even considered.
    pub fn is_selectable(&self) -> bool {
        !self.blackened && !self.no_cell
    }

    /// Whether this cell counts as finished for the solved check.
    pub fn is_done(&self) -> bool {
        self.blackened || self.no_cell
    }

    /// Whether this cell blocks an adjacency walk passing over it.
    ///
    /// Only a live, unmarked empty slot blocks; letters, blackened cells and
    /// no-cells all pass through.
    pub fn blocks_path(&self) -> bool {
        !self.blackened && self.empty_cell && !self.no_cell
    }

    /// The character shown to a rendering layer (blank for consumed cells).
    pub fn display_char(&self) -> char {
        if self.blackened || self.no_cell {
            ' '
        } else {
            self.content
        }
    }

    pub(crate) fn set_blackened(&mut self, blackened: bool) {
        self.blackened = blackened;
    }

    pub(crate) fn set_being_marked(&mut self, being_marked: bool) {
        self.being_marked = being_marked;
    }

    /// Commit literal content into this cell, ending any marking in progress.
    pub(crate) fn set_content(&mut self, content: char) {
        self.content = content;
        self.empty_cell = false;
        self.being_marked = false;
    }
}
