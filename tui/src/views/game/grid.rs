//! Board rendering for the playing view.
//!
//! Each cell is drawn three characters wide so that background colors read
//! as blocks rather than single glyphs.

use crate::theme::Theme;
use lok_core::{Board, Cell};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of a single rendered cell in characters.
const CELL_WIDTH: u16 = 3;

/// Rendered width of the whole board in characters.
pub fn board_width(board: &Board) -> u16 {
    (board.max_col() as u16 + 1) * CELL_WIDTH
}

/// Render the board as one [`Line`] per row, highlighting the cursor.
pub fn board_lines(board: &Board, cursor: (usize, usize), theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.max_row() + 1);

    for row in 0..=board.max_row() {
        let mut spans = Vec::with_capacity(board.max_col() + 1);
        for col in 0..=board.max_col() {
            let under_cursor = cursor == (row, col);
            spans.push(cell_span(board.get(row, col), under_cursor, theme));
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn cell_span(cell: Option<&Cell>, under_cursor: bool, theme: &Theme) -> Span<'static> {
    // cells absent from a short row render like no-cells
    let Some(cell) = cell.filter(|c| !c.is_no_cell()) else {
        let style = if under_cursor {
            Style::default().bg(theme.dimmed)
        } else {
            Style::default()
        };
        return Span::styled("   ", style);
    };

    if cell.is_blackened() {
        let style = if under_cursor {
            Style::default().fg(theme.blackened).bg(theme.primary)
        } else {
            Style::default().fg(theme.blackened)
        };
        return Span::styled("███", style);
    }

    let text = format!(" {} ", cell.display_char());

    let mut style = if cell.is_being_marked() {
        Style::default().bg(theme.marked).fg(Color::Black)
    } else if cell.is_empty_cell() {
        Style::default().bg(theme.empty_slot).fg(theme.text)
    } else {
        Style::default().fg(theme.text)
    };

    if under_cursor {
        style = style.bg(theme.primary).fg(Color::Black).add_modifier(Modifier::BOLD);
    }

    Span::styled(text, style)
}
