pub mod adjacency;
pub mod board;
pub mod cell;
pub mod direction;
pub mod game;
pub mod spell;

pub use board::{Board, BoardError};
pub use cell::{Cell, WILDCARD};
pub use direction::Direction;
pub use game::{Game, Mode};
pub use spell::{SpellBook, SpellBookError, SpellTarget};
