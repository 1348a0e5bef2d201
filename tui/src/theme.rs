//! Theme system for the LOK player.
//!
//! Provides preset color schemes that can be selected by the user.

use ratatui::style::Color;

/// A color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Unique identifier for the theme.
    pub id: &'static str,
    /// Display name for the theme.
    pub name: &'static str,

    // Semantic colors
    /// Primary color for selected items, cursor, action keys.
    pub primary: Color,
    /// Secondary color for titles and the status label.
    pub secondary: Color,
    /// Normal text content.
    pub text: Color,
    /// Dimmed text for descriptions, inactive items.
    pub dimmed: Color,
    /// Success indicators (the solved banner).
    pub success: Color,
    /// Error indicators.
    pub error: Color,

    // Grid colors
    /// Fill color for blackened cells.
    pub blackened: Color,
    /// Background of a live empty slot.
    pub empty_slot: Color,
    /// Background of the slot currently marked for text entry.
    pub marked: Color,
}

/// Default theme, built from the 16 ANSI colors.
pub const DEFAULT: Theme = Theme {
    id: "default",
    name: "Default",
    primary: Color::Yellow,
    secondary: Color::Cyan,
    text: Color::White,
    dimmed: Color::DarkGray,
    success: Color::Green,
    error: Color::Red,
    blackened: Color::White,
    empty_slot: Color::DarkGray,
    marked: Color::Magenta,
};

/// Ink theme - black blocks on parchment tones, close to the printed book.
pub const INK: Theme = Theme {
    id: "ink",
    name: "Ink",
    primary: Color::Rgb(184, 134, 11),      // dark goldenrod
    secondary: Color::Rgb(105, 105, 105),   // dim gray
    text: Color::Rgb(230, 225, 210),        // parchment
    dimmed: Color::Rgb(128, 122, 110),      // faded ink
    success: Color::Rgb(34, 139, 34),       // forest green
    error: Color::Rgb(178, 34, 34),         // firebrick
    blackened: Color::Rgb(20, 20, 20),      // near black
    empty_slot: Color::Rgb(70, 66, 60),     // shaded slot
    marked: Color::Rgb(139, 101, 8),        // pencil gold
};

/// Night theme - cool blues for dark terminals.
pub const NIGHT: Theme = Theme {
    id: "night",
    name: "Night",
    primary: Color::Rgb(244, 208, 111),     // sandy gold
    secondary: Color::Rgb(70, 130, 180),    // steel blue
    text: Color::Rgb(240, 248, 255),        // alice blue
    dimmed: Color::Rgb(119, 136, 153),      // light slate gray
    success: Color::Rgb(32, 178, 170),      // light sea green
    error: Color::Rgb(205, 92, 92),         // indian red
    blackened: Color::Rgb(176, 196, 222),   // light steel blue
    empty_slot: Color::Rgb(40, 50, 70),     // deep blue slot
    marked: Color::Rgb(25, 25, 112),        // midnight blue
};

impl Theme {
    /// All available themes.
    pub const ALL: [Theme; 3] = [DEFAULT, INK, NIGHT];

    /// Look up a theme by its ID.
    ///
    /// Returns the DEFAULT theme if the ID is not found.
    pub fn by_id(id: &str) -> Theme {
        Theme::ALL
            .iter()
            .copied()
            .find(|t| t.id == id)
            .unwrap_or(DEFAULT)
    }
}
