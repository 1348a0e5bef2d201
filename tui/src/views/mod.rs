pub mod editor;
pub mod game;
pub mod help;
pub mod menu;
pub mod theme_select;
