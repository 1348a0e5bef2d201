use crate::{App, AppView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Help content sections with their keyboard shortcuts.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Playing",
        &[
            ("Arrow keys", "Move between cells"),
            ("Enter/Space", "Pick the cell under the cursor"),
            ("A-Z", "Write into a marked slot"),
            ("R", "Restart the puzzle"),
        ],
    ),
    (
        "Spells",
        &[
            ("LOK", "Black out any one cell"),
            ("TLAK", "Black out two adjacent cells"),
            ("TA", "Black out every cell with a letter"),
            ("BE", "Mark an empty slot for writing"),
        ],
    ),
    (
        "Editor",
        &[
            ("A-Z", "Letter cell (X is a wildcard)"),
            ("_", "Empty slot"),
            ("*", "Already blackened cell"),
            ("Space", "Gap in the grid"),
        ],
    ),
    (
        "General",
        &[
            ("Ctrl+H", "Show help"),
            ("ESC", "Back"),
            ("Ctrl+C", "Quit application"),
        ],
    ),
];

impl App {
    pub fn draw_help(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;

        // Calculate content height: title (1) + blank (1) + sections
        let mut content_height: u16 = 2; // title + blank line
        for (_section_name, items) in HELP_SECTIONS {
            content_height += 1; // section header
            content_height += items.len() as u16; // items
            content_height += 1; // blank line after section
        }
        content_height += 1; // footer

        let content_width: u16 = 48;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height)])
            .flex(Flex::Center)
            .areas(centered_area);

        // Build help content
        let mut lines: Vec<Line> = Vec::new();

        // Title
        lines.push(Line::from(Span::styled(
            "━━━ How to Play ━━━",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        // Sections
        for (section_name, items) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                section_name.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));

            for (key, description) in *items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<12}", key), Style::default().fg(theme.secondary)),
                    Span::styled(
                        format!("  {}", description),
                        Style::default().fg(theme.dimmed),
                    ),
                ]));
            }

            lines.push(Line::from(""));
        }

        // Footer
        lines.push(Line::from(vec![
            Span::styled("ESC", Style::default().fg(theme.primary)),
            Span::styled(" to return", Style::default().fg(theme.dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines), centered_area);
    }

    pub fn handle_help_input(&mut self, key: KeyEvent) {
        // Any of these keys returns, but ESC is the primary one
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
            // Return to previous view if set, otherwise go to menu
            if let Some(prev) = self.previous_view.take() {
                self.view = prev;
            } else {
                self.view = AppView::Menu;
            }
        }
    }
}
