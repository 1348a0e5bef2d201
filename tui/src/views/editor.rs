use crate::{App, AppView, game::GameView};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lok_catalog::CatalogEntry;
use lok_core::Game;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default, Debug)]
pub struct EditorState {
    /// Puzzle text being edited.
    pub text: String,
    /// Catalog number prompt, `Some` while the save dialog is open.
    pub number_input: Option<String>,
    /// Last validation or save error, shown under the editor.
    pub error: Option<String>,
}

impl App {
    pub fn draw_editor(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;
        let editor = &self.state.editor;

        let text_lines: Vec<&str> = editor.text.split('\n').collect();
        let text_width = text_lines.iter().map(|l| l.len()).max().unwrap_or(0);

        let content_width: u16 = (text_width as u16 + 2).max(48);
        // title + blank + text + cursor line + blank + prompt/error + blank + footer
        let content_height: u16 = text_lines.len() as u16 + 7;

        let [centered_area] = Layout::horizontal([Constraint::Length(content_width + 4)])
            .flex(Flex::Center)
            .areas(area);
        let [centered_area] = Layout::vertical([Constraint::Length(content_height + 4)])
            .flex(Flex::Center)
            .areas(centered_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.secondary));
        let inner_area = block.inner(centered_area);
        frame.render_widget(block, centered_area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            "Custom Puzzle",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        // the edited text, with a cursor block at the end of the last line
        for (i, text_line) in text_lines.iter().enumerate() {
            let mut spans = vec![Span::styled(
                text_line.to_string(),
                Style::default().fg(theme.text),
            )];
            if i == text_lines.len() - 1 && editor.number_input.is_none() {
                spans.push(Span::styled("█", Style::default().fg(theme.primary)));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));

        if let Some(num) = &editor.number_input {
            lines.push(Line::from(vec![
                Span::styled("save as puzzle #: ", Style::default().fg(theme.dimmed)),
                Span::styled(
                    num.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", Style::default().fg(theme.primary)),
            ]));
        } else if let Some(err) = &editor.error {
            lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(theme.error),
            )));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("<CTRL-L>", Style::default().fg(theme.primary)),
            Span::styled(" play  ", Style::default().fg(theme.dimmed)),
            Span::styled("<CTRL-S>", Style::default().fg(theme.primary)),
            Span::styled(" save  ", Style::default().fg(theme.dimmed)),
            Span::styled("<CTRL-K>", Style::default().fg(theme.primary)),
            Span::styled(" clear  ", Style::default().fg(theme.dimmed)),
            Span::styled("<ESC>", Style::default().fg(theme.primary)),
            Span::styled(" back", Style::default().fg(theme.dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines).centered(), inner_area);
    }

    pub fn handle_editor_input(&mut self, key: KeyEvent) {
        // the save dialog captures all input while open
        if self.state.editor.number_input.is_some() {
            self.handle_editor_number_input(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => self.open_save_dialog(),
                KeyCode::Char('l') | KeyCode::Char('L') => self.play_edited_puzzle(None),
                KeyCode::Char('k') | KeyCode::Char('K') => {
                    self.state.editor.text.clear();
                    self.state.editor.error = None;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.state.editor.error = None;
                self.set_view(AppView::Menu);
            }
            KeyCode::Enter => self.state.editor.text.push('\n'),
            KeyCode::Backspace => {
                self.state.editor.text.pop();
            }
            KeyCode::Char(c) => {
                self.state.editor.text.push(c);
                self.state.editor.error = None;
            }
            _ => {}
        }
    }

    fn handle_editor_number_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.editor.number_input = None,
            KeyCode::Backspace => {
                if let Some(num) = self.state.editor.number_input.as_mut() {
                    num.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(num) = self.state.editor.number_input.as_mut() {
                    num.push(c);
                }
            }
            KeyCode::Enter => {
                let Some(num) = self
                    .state
                    .editor
                    .number_input
                    .as_ref()
                    .and_then(|n| n.parse::<u32>().ok())
                else {
                    self.state.editor.error = Some("enter a puzzle number".to_string());
                    self.state.editor.number_input = None;
                    return;
                };
                self.state.editor.number_input = None;
                self.save_edited_puzzle(num);
            }
            _ => {}
        }
    }

    /// Open the save dialog, prefilled with the next free catalog number.
    fn open_save_dialog(&mut self) {
        if self.validate_edited_puzzle() {
            let next = self.state.catalog.next_num();
            self.state.editor.number_input = Some(next.to_string());
        }
    }

    /// Check that the edited text parses as a playable board.
    fn validate_edited_puzzle(&mut self) -> bool {
        match Game::load(&self.state.editor.text) {
            Ok(_) => {
                self.state.editor.error = None;
                true
            }
            Err(err) => {
                self.state.editor.error = Some(err.to_string());
                false
            }
        }
    }

    /// Store the edited puzzle in the catalog, then start playing it.
    fn save_edited_puzzle(&mut self, num: u32) {
        self.state.catalog.upsert(CatalogEntry {
            num,
            puzzle: self.state.editor.text.clone(),
        });
        if let Err(err) = self.state.catalog.save() {
            self.state.editor.error = Some(err.to_string());
            return;
        }
        self.play_edited_puzzle(Some(num));
    }

    /// Load the edited text as a game and switch to the playing view.
    fn play_edited_puzzle(&mut self, num: Option<u32>) {
        if !self.validate_edited_puzzle() {
            return;
        }
        let text = self.state.editor.text.clone();
        if self.state.game.load_puzzle(num, &text) {
            self.save_preferences();
            self.set_view(AppView::Game(GameView::Playing));
        }
    }
}
