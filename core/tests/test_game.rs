//! Full playthroughs of real puzzles from the book, exercising the engine
//! end to end: parsing, adjacency, spells and win detection together.

use lok_core::{Game, Mode};

fn assert_live(game: &Game, row: usize, col: usize) {
    assert!(
        !game.board().get(row, col).unwrap().is_blackened(),
        "expected ({row}, {col}) to still be live"
    );
}

#[test]
fn play_puzzle_two() {
    // KOL
    //  _
    let mut game = Game::load("KOL\n _").unwrap();

    // spell LOK backwards across the top row
    game.click(0, 2);
    game.click(0, 1);
    game.click(0, 0);
    assert_eq!(game.mode(), Mode::PickOneBlock);
    assert_eq!(game.spell(), "");

    // spend the block on the empty slot
    game.click(1, 1);
    assert_eq!(game.mode(), Mode::Solved);
}

#[test]
fn play_puzzle_six() {
    // OLKOLKOK: two interleaved LOKs plus two leftover letters
    let mut game = Game::load("OLKOLKOK").unwrap();

    game.click(0, 1); // L
    game.click(0, 3); // O, stepping over the K between them
    game.click(0, 5); // K
    assert_eq!(game.mode(), Mode::PickOneBlock);
    game.click(0, 0);
    assert_eq!(game.mode(), Mode::PickFirstLetter);

    game.click(0, 4); // L
    game.click(0, 6); // O, over the blackened col 5
    game.click(0, 7); // K
    assert_eq!(game.mode(), Mode::PickOneBlock);
    assert_live(&game, 0, 2);
    game.click(0, 2);
    assert_eq!(game.mode(), Mode::Solved);
}

#[test]
fn word_wraps_through_the_row_edge() {
    // the live empty slot blocks the direct path from L to O, so the word
    // continues around through the row boundary
    let mut game = Game::load("OK_L").unwrap();

    game.click(0, 3); // L
    game.click(0, 0); // O, reached by wrapping
    game.click(0, 1); // K continues in the same (wrapped) direction
    assert_eq!(game.mode(), Mode::PickOneBlock);

    game.click(0, 2);
    assert_eq!(game.mode(), Mode::Solved);
}

#[test]
fn be_commits_a_letter_that_finishes_the_board() {
    // BE_
    // LOK
    let mut game = Game::load("BE_\nLOK").unwrap();

    game.click(0, 0);
    game.click(0, 1);
    assert_eq!(game.mode(), Mode::MarkOneEmptyBlock);

    game.click(0, 2);
    assert!(game.board().get(0, 2).unwrap().is_being_marked());
    game.end_inputting(0, 2, 'k');
    assert_eq!(game.board().get(0, 2).unwrap().content(), 'K');
    assert_eq!(game.mode(), Mode::PickFirstLetter);

    game.click(1, 0);
    game.click(1, 1);
    game.click(1, 2);
    assert_eq!(game.mode(), Mode::PickOneBlock);

    // the committed cell is an ordinary letter now
    game.click(0, 2);
    assert_eq!(game.mode(), Mode::Solved);
}

#[test]
fn play_puzzle_twenty_eight() {
    // LOXK: the wildcard joins the word unspelled and stays live, so the
    // board cannot solve until the earned block is spent on it
    let mut game = Game::load("LOXK").unwrap();

    game.click(0, 0);
    game.click(0, 1);
    game.click(0, 2); // wildcard
    game.click(0, 3);
    assert_eq!(game.mode(), Mode::PickOneBlock);
    assert_live(&game, 0, 2);

    game.click(0, 2);
    assert_eq!(game.mode(), Mode::Solved);
}

#[test]
fn play_puzzle_eighteen() {
    // TA over a block of Us
    let mut game = Game::load("TA\nUUU\nUUU").unwrap();

    game.click(0, 0);
    game.click(0, 1);
    assert_eq!(game.mode(), Mode::BlackenAllSameLetter);
    game.click(2, 0);
    assert_eq!(game.mode(), Mode::Solved);
}

#[test]
fn invalid_moves_leave_no_trace() {
    let text = "LKOL\nO  _\nK  _";
    let mut game = Game::load(text).unwrap();
    let fresh = Game::load(text).unwrap();

    game.click(1, 1); // no-cell
    game.click(0, 3); // fine: L picked
    game.click(2, 0); // disconnected from (0, 3), ignored
    game.click(5, 5); // out of bounds

    assert_eq!(game.mode(), Mode::PickSecondLetter { last: (0, 3) });
    assert_eq!(game.spell(), "L");

    // reloading the same text restores the initial board exactly
    let reloaded = Game::load(text).unwrap();
    assert_eq!(reloaded.board(), fresh.board());
    assert_eq!(reloaded.mode(), Mode::PickFirstLetter);
    assert_eq!(reloaded.spell(), "");
}
