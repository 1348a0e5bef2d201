use crate::{Board, BoardError, Direction, SpellBook, SpellTarget, WILDCARD};

/// Interaction mode of a game in progress.
///
/// Modes that continue a previous pick carry the last picked position (and,
/// once locked, the word's direction) as payload, so that state is only
/// readable where it is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for the first letter of a spell.
    PickFirstLetter,
    /// One letter picked; the next one locks the word's direction.
    PickSecondLetter { last: (usize, usize) },
    /// Word under way; further picks must continue in `dir`.
    PickRestOfLetters { last: (usize, usize), dir: Direction },
    /// `LOK` resolved: blacken any one cell.
    PickOneBlock,
    /// `TLAK` resolved: blacken a first cell.
    PickTwoBlocks,
    /// `TLAK`, second half: blacken a cell adjacent to the first.
    PickTwoBlocksSecond { last: (usize, usize) },
    /// `TA` resolved: blacken every cell sharing the picked letter.
    BlackenAllSameLetter,
    /// `BE` resolved: mark one empty slot for text entry.
    MarkOneEmptyBlock,
    /// Every cell is blackened or a no-cell. Terminal.
    Solved,
}

impl From<SpellTarget> for Mode {
    fn from(target: SpellTarget) -> Self {
        match target {
            SpellTarget::PickOneBlock => Mode::PickOneBlock,
            SpellTarget::PickTwoBlocks => Mode::PickTwoBlocks,
            SpellTarget::BlackenAllSameLetter => Mode::BlackenAllSameLetter,
            SpellTarget::MarkOneEmptyBlock => Mode::MarkOneEmptyBlock,
        }
    }
}

/// A LOK puzzle in play: the board plus the interaction state driving it.
///
/// Input events are [`click`](Game::click) and
/// [`end_inputting`](Game::end_inputting); each is processed synchronously to
/// completion. Rejected moves are silent no-ops, never errors.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    mode: Mode,
    spell: String,
    spells: SpellBook,
}

impl Game {
    /// Load puzzle text with the standard spell set. Interaction state always
    /// starts over: mode at [`Mode::PickFirstLetter`], spell buffer empty.
    pub fn load(text: &str) -> Result<Self, BoardError> {
        Self::with_spells(text, SpellBook::standard())
    }

    pub fn with_spells(text: &str, spells: SpellBook) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::parse(text)?,
            mode: Mode::PickFirstLetter,
            spell: String::new(),
            spells,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The letters accumulated towards the next spell.
    pub fn spell(&self) -> &str {
        &self.spell
    }

    pub fn spells(&self) -> &SpellBook {
        &self.spells
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.mode, Mode::Solved)
    }

    /// Process a click on the cell at (row, col).
    pub fn click(&mut self, row: usize, col: usize) {
        let Some(cell) = self.board.get(row, col) else {
            return;
        };
        if !cell.is_selectable() {
            return;
        }
        let content = cell.content();
        let is_empty = cell.is_empty_cell();

        match self.mode {
            Mode::PickFirstLetter => {
                if is_empty {
                    return;
                }
                if content != WILDCARD {
                    self.board.set_blackened(row, col);
                }
                self.mode = Mode::PickSecondLetter { last: (row, col) };
                self.spell_out(content);
            }
            Mode::PickSecondLetter { last } => {
                if is_empty {
                    return;
                }
                let Some(dir) = self.board.adjacent((row, col), last) else {
                    return;
                };
                if content != WILDCARD {
                    self.board.set_blackened(row, col);
                    self.mode = Mode::PickRestOfLetters { last: (row, col), dir };
                } else {
                    // a wildcard advances the pick without locking a direction
                    self.mode = Mode::PickSecondLetter { last: (row, col) };
                }
                self.spell_out(content);
            }
            Mode::PickRestOfLetters { last, dir } => {
                if is_empty {
                    return;
                }
                let Some(step) = self.board.adjacent((row, col), last) else {
                    return;
                };
                if step != dir {
                    return;
                }
                if content != WILDCARD {
                    self.board.set_blackened(row, col);
                }
                self.mode = Mode::PickRestOfLetters { last: (row, col), dir };
                self.spell_out(content);
            }
            Mode::PickOneBlock => {
                self.board.set_blackened(row, col);
                self.mode = Mode::PickFirstLetter;
            }
            Mode::PickTwoBlocks => {
                self.board.set_blackened(row, col);
                self.mode = Mode::PickTwoBlocksSecond { last: (row, col) };
            }
            Mode::PickTwoBlocksSecond { last } => {
                if self.board.adjacent((row, col), last).is_none() {
                    return;
                }
                self.board.set_blackened(row, col);
                self.mode = Mode::PickFirstLetter;
            }
            Mode::BlackenAllSameLetter => {
                self.mode = Mode::PickFirstLetter;
                self.board.blacken_all_matching(content);
            }
            Mode::MarkOneEmptyBlock => {
                self.board.set_being_marked(row, col, true);
            }
            Mode::Solved => return,
        }

        if matches!(self.mode, Mode::PickFirstLetter) && self.board.is_solved() {
            self.mode = Mode::Solved;
        }
    }

    /// Commit a typed letter into the cell being marked (the confirm half of
    /// the `BE` spell). No-op unless that cell is currently marked.
    pub fn end_inputting(&mut self, row: usize, col: usize, letter: char) {
        let Some(cell) = self.board.get(row, col) else {
            return;
        };
        if !cell.is_being_marked() {
            return;
        }
        self.board
            .set_content(row, col, letter.to_ascii_uppercase());
        self.mode = Mode::PickFirstLetter;
    }

    /// Append a picked letter to the spell buffer and resolve it against the
    /// spell book. A match clears the buffer and overrides the mode set by
    /// the click itself. Wildcards never spell.
    fn spell_out(&mut self, content: char) {
        if content == WILDCARD {
            return;
        }
        self.spell.push(content);
        if let Some(target) = self.spells.lookup(&self.spell) {
            self.spell.clear();
            self.mode = target.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(text: &str) -> Game {
        Game::load(text).unwrap()
    }

    #[test]
    fn first_pick_blackens_and_spells() {
        let mut g = game("KOL\n _");
        g.click(0, 2);
        assert!(g.board().get(0, 2).unwrap().is_blackened());
        assert_eq!(g.mode(), Mode::PickSecondLetter { last: (0, 2) });
        assert_eq!(g.spell(), "L");
    }

    #[test]
    fn clicks_on_dead_cells_are_noops() {
        let mut g = game("*K \nOL_");
        g.click(0, 0); // blackened
        g.click(0, 2); // no-cell
        g.click(1, 2); // empty cell in a letter-pick mode
        g.click(9, 9); // out of bounds
        assert_eq!(g.mode(), Mode::PickFirstLetter);
        assert_eq!(g.spell(), "");
    }

    #[test]
    fn disconnected_second_pick_is_ignored() {
        let mut g = game("KL\nOT");
        g.click(0, 0);
        g.click(1, 1); // diagonal
        assert_eq!(g.mode(), Mode::PickSecondLetter { last: (0, 0) });
        assert!(!g.board().get(1, 1).unwrap().is_blackened());
    }

    #[test]
    fn direction_locks_after_second_pick() {
        let mut g = game("LOL\nKQK");
        g.click(0, 0);
        g.click(0, 1); // locks Right
        assert_eq!(
            g.mode(),
            Mode::PickRestOfLetters {
                last: (0, 1),
                dir: Direction::Right
            }
        );
        g.click(1, 1); // down: wrong direction, ignored entirely
        assert_eq!(
            g.mode(),
            Mode::PickRestOfLetters {
                last: (0, 1),
                dir: Direction::Right
            }
        );
        assert!(!g.board().get(1, 1).unwrap().is_blackened());
        assert_eq!(g.spell(), "LO");
        g.click(0, 2); // continues right
        assert_eq!(g.spell(), "LOL");
    }

    #[test]
    fn lok_spell_enters_pick_one_block() {
        let mut g = game("LOK\n K");
        g.click(0, 0);
        g.click(0, 1);
        g.click(0, 2);
        assert_eq!(g.mode(), Mode::PickOneBlock);
        assert_eq!(g.spell(), "");
    }

    #[test]
    fn wildcard_is_skipped_by_the_spell_buffer() {
        // L O X K still spells LOK; the X is stepped through but not spelled
        let mut g = game("LOXK\nT");
        g.click(0, 0);
        g.click(0, 1);
        g.click(0, 2); // wildcard
        assert_eq!(g.spell(), "LO");
        assert!(!g.board().get(0, 2).unwrap().is_blackened());
        g.click(0, 3);
        assert_eq!(g.mode(), Mode::PickOneBlock);
        assert_eq!(g.spell(), "");
    }

    #[test]
    fn wildcard_as_first_pick_is_not_blackened() {
        let mut g = game("XLOK");
        g.click(0, 0);
        assert!(!g.board().get(0, 0).unwrap().is_blackened());
        assert_eq!(g.mode(), Mode::PickSecondLetter { last: (0, 0) });
        assert_eq!(g.spell(), "");
    }

    #[test]
    fn pick_one_block_blackens_anything() {
        let mut g = game("LOK\n__");
        g.click(0, 0);
        g.click(0, 1);
        g.click(0, 2);
        assert_eq!(g.mode(), Mode::PickOneBlock);
        g.click(1, 0); // even an empty slot
        assert!(g.board().get(1, 0).unwrap().is_blackened());
        assert_eq!(g.mode(), Mode::PickFirstLetter);
    }

    #[test]
    fn tlak_requires_adjacent_second_block() {
        let mut g = game("TLAK\nQ  Q\n  Z");
        for col in 0..4 {
            g.click(0, col);
        }
        assert_eq!(g.mode(), Mode::PickTwoBlocks);
        g.click(1, 0);
        assert_eq!(g.mode(), Mode::PickTwoBlocksSecond { last: (1, 0) });
        g.click(2, 2); // disconnected, ignored
        assert!(!g.board().get(2, 2).unwrap().is_blackened());
        assert_eq!(g.mode(), Mode::PickTwoBlocksSecond { last: (1, 0) });
        g.click(1, 3); // row 1 interior is all no-cells: passes through
        assert!(g.board().get(1, 3).unwrap().is_blackened());
        assert_eq!(g.mode(), Mode::PickFirstLetter);
    }

    #[test]
    fn ta_blackens_all_same_letter() {
        let mut g = game("TA\nUUU\nUUU");
        g.click(0, 0);
        g.click(0, 1);
        assert_eq!(g.mode(), Mode::BlackenAllSameLetter);
        g.click(1, 1);
        assert_eq!(g.mode(), Mode::Solved);
    }

    #[test]
    fn be_marks_and_commits_an_empty_slot() {
        let mut g = game("BE_\nK__");
        g.click(0, 0);
        g.click(0, 1);
        assert_eq!(g.mode(), Mode::MarkOneEmptyBlock);
        g.click(1, 1);
        assert!(g.board().get(1, 1).unwrap().is_being_marked());
        // mode is unchanged until the input is committed
        assert_eq!(g.mode(), Mode::MarkOneEmptyBlock);

        g.end_inputting(1, 1, 'q');
        assert_eq!(g.board().get(1, 1).unwrap().content(), 'Q');
        assert!(!g.board().get(1, 1).unwrap().is_empty_cell());
        assert_eq!(g.mode(), Mode::PickFirstLetter);
    }

    #[test]
    fn end_inputting_on_unmarked_cell_is_noop() {
        let mut g = game("K_");
        g.end_inputting(0, 1, 'z');
        assert!(g.board().get(0, 1).unwrap().is_empty_cell());
        assert_eq!(g.mode(), Mode::PickFirstLetter);
    }

    #[test]
    fn solved_is_terminal() {
        let mut g = game("LOKQ");
        g.click(0, 0);
        g.click(0, 1);
        g.click(0, 2); // spells LOK
        g.click(0, 3); // PickOneBlock consumes the last letter
        assert_eq!(g.mode(), Mode::Solved);
        assert!(g.is_solved());
        g.click(0, 0);
        g.end_inputting(0, 0, 'A');
        assert_eq!(g.mode(), Mode::Solved);
    }

    #[test]
    fn win_check_runs_only_in_pick_first_letter() {
        // spelling LOK leaves an already-done board in PickOneBlock; the
        // solved check does not fire until the mode comes back around
        let mut g = game("LOK ");
        g.click(0, 0);
        g.click(0, 1);
        g.click(0, 2);
        assert!(g.board().is_solved());
        assert_eq!(g.mode(), Mode::PickOneBlock);
    }

    #[test]
    fn reload_resets_everything() {
        let text = "LOK\n _";
        let mut g = Game::load(text).unwrap();
        g.click(0, 0);
        g.click(0, 1);
        let fresh = Game::load(text).unwrap();
        assert_ne!(g.board(), fresh.board());
        assert_eq!(fresh.mode(), Mode::PickFirstLetter);
        assert_eq!(fresh.spell(), "");
        assert_eq!(fresh.board(), Game::load(text).unwrap().board());
    }
}
