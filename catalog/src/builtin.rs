//! The default puzzle list, transcribed from the printed book.
//!
//! Numbering follows the book, so there are gaps where a puzzle needs
//! mechanics this player does not have.

use crate::CatalogEntry;

const BUILTIN: &[(u32, &str)] = &[
    (1, "**\n**"),
    (2, "KOL\n _"),
    (3, "LKOL\nO  _\nK  _"),
    (4, "_K\nLOK\nOL\nK"),
    (5, "  L\n  O\n K_\nLOOK_\n L_\n  K"),
    (6, "OLKOLKOK"),
    (7, "K\nO_L_O_K\nKLOKO_L\nL"),
    (8, "LOL\nO_O\nKOLOK\n  O\n  K"),
    (9, "TLTLAKAK\n___\n_"),
    (10, "  _ T\n  K L\n  A _\nKOL___L\n  T A\n    K"),
    (11, "KTL\nLLK\nOAO_\nLKK_"),
    (12, "  K\n __\nTLOAK\nKOL_\n KL"),
    (13, " LOK\nTL_AK\n_KAL_T\nK___OL"),
    (14, " _\n TT\nTLL\nLAA\nAKK\nKOL\n _"),
    (15, " _K\nKALLT\nK_O_O_L\n LOK\n  L"),
    (16, "  K\n  O_L\n  LOK\nTLAKOOK\n  L K"),
    (17, "L      L\nTTLLAAKK\nOLOKOAKO\nK K K  K"),
    (18, "TA\nUUU\nUUU"),
    (19, " HHH\nTGTGA\n GAG"),
    (20, "SALASOK\n   T"),
    (21, "TE_A\nDT_A\nDETA\n"),
    (23, "  TL\n  LO\nTLTAAK\n  AK\n  K"),
    (24, "T_T_LAK\n_______\nTLALOK"),
    (25, "   T\n  FLZD\nTLZAAK\n LOK\n"),
    (26, "TLATLAKK\n   LOK\n   KALT"),
    (27, "MJKKJ\nLOTAK\n DAAD\n  LLJ\n  TTD\n  M"),
    (28, "LOXK"),
    (29, "TLX\nKAX"),
    (30, "L K\nXOXOK\n  L"),
    (32, "  TX\nXK_L_T\nAXAX"),
    (33, "    K\n TAKA\nX__AX\nLTLX\nT"),
];

/// The built-in puzzles, in book order.
pub fn builtin_puzzles() -> Vec<CatalogEntry> {
    BUILTIN
        .iter()
        .map(|&(num, puzzle)| CatalogEntry {
            num,
            puzzle: puzzle.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_numbers_are_sorted_and_unique() {
        let puzzles = builtin_puzzles();
        for pair in puzzles.windows(2) {
            assert!(pair[0].num < pair[1].num);
        }
    }

    #[test]
    fn every_builtin_parses_as_a_board() {
        for entry in builtin_puzzles() {
            let game = lok_core::Game::load(&entry.puzzle);
            assert!(game.is_ok(), "puzzle {} failed to load", entry.num);
        }
    }
}
