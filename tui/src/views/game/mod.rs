use crate::{App, AppView};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lok_catalog::Catalog;
use lok_core::{Game, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

mod grid;

#[derive(Default, Debug, Clone, PartialEq)]
pub enum GameView {
    /// User is selecting a puzzle from the catalog.
    #[default]
    Selecting,
    /// User is playing the puzzle loaded within [`GameState::game`].
    Playing,
}

#[derive(Default, Debug)]
pub struct GameState {
    /// Loaded game, if any.
    pub game: Option<Game>,
    /// Catalog number of the loaded puzzle, `None` for an unsaved custom one.
    pub puzzle_num: Option<u32>,
    /// Source text of the loaded puzzle, kept around for restarts.
    pub puzzle_text: String,
    /// Cursor position on the board as `(row, col)`.
    pub cursor: (usize, usize),
    /// Selected entry index on the puzzle list.
    pub sel: usize,
}

impl GameState {
    /// Move the list selection onto the last played puzzle, if it is
    /// still in the catalog.
    pub fn prepare_selection(&mut self, catalog: &Catalog) {
        if let Some(num) = self.puzzle_num {
            if let Some(idx) = catalog.entries().iter().position(|e| e.num == num) {
                self.sel = idx;
            }
        }
        self.sel = self.sel.min(catalog.entries().len().saturating_sub(1));
    }

    /// Load a puzzle from its source text, resetting the cursor.
    ///
    /// Returns `false` when the text does not parse as a board.
    pub fn load_puzzle(&mut self, num: Option<u32>, text: &str) -> bool {
        match Game::load(text) {
            Ok(game) => {
                self.game = Some(game);
                self.puzzle_num = num;
                self.puzzle_text = text.to_string();
                self.cursor = (0, 0);
                true
            }
            Err(_) => false,
        }
    }

    /// Position of the cell currently marked for text entry, if any.
    fn marked_cell(&self) -> Option<(usize, usize)> {
        let game = self.game.as_ref()?;
        game.board()
            .rows()
            .iter()
            .flatten()
            .find(|cell| cell.is_being_marked())
            .map(|cell| {
                let (col, row) = cell.position();
                (row, col)
            })
    }
}

/// Status label shown under the grid for each interaction mode.
fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::PickFirstLetter => "start entering a spell",
        Mode::PickSecondLetter { .. } | Mode::PickRestOfLetters { .. } => "keep picking letters",
        Mode::PickOneBlock => "pick a cell to black out",
        Mode::PickTwoBlocks => "pick 2 cells to black out",
        Mode::PickTwoBlocksSecond { .. } => "pick 2nd cell adjacent to previous",
        Mode::BlackenAllSameLetter => {
            "pick a cell, all cells with same letter will be blackened out"
        }
        Mode::MarkOneEmptyBlock => "Mark one empty block",
        Mode::Solved => "You solved it! Well done!",
    }
}

impl App {
    pub fn draw_game(&mut self, view: GameView, frame: &mut Frame) {
        match view {
            GameView::Selecting => self.draw_game_selecting(frame),
            GameView::Playing => self.draw_game_playing(frame),
        }
    }

    fn draw_game_selecting(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;
        let entries = self.state.catalog.entries();

        let content_width: u16 = 30;
        // a window of at most 12 list rows
        let window = 12usize;
        let content_height: u16 = 1 + 1 + window.min(entries.len()).max(1) as u16 + 1 + 1;

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
            "Select a Puzzle",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        if entries.is_empty() {
            lines.push(Line::from(Span::styled(
                "catalog is empty",
                Style::default().fg(theme.dimmed),
            )));
        } else {
            // keep the selection inside the visible window
            let sel = self.state.game.sel.min(entries.len() - 1);
            let start = sel.saturating_sub(window / 2).min(entries.len().saturating_sub(window));
            for (i, entry) in entries.iter().enumerate().skip(start).take(window) {
                let style = if i == sel {
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                let prefix = if i == sel { "> " } else { "  " };
                lines.push(Line::from(Span::styled(
                    format!("{}Puzzle {}", prefix, entry.num),
                    style,
                )));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("<", Style::default().fg(theme.primary)),
            Span::styled("ENTER", Style::default().fg(theme.primary)),
            Span::styled("> play  ", Style::default().fg(theme.dimmed)),
            Span::styled("<", Style::default().fg(theme.primary)),
            Span::styled("ESC", Style::default().fg(theme.primary)),
            Span::styled("> back", Style::default().fg(theme.dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines).centered(), inner_area);
    }

    fn draw_game_playing(&mut self, frame: &mut Frame) {
        let Some(game) = self.state.game.game.as_ref() else {
            return; // nothing to draw
        };
        let theme = self.state.theme;
        let area = frame.area();

        let board = game.board();
        let grid_lines = grid::board_lines(board, self.state.game.cursor, &theme);
        let grid_width = grid::board_width(board);
        let grid_height = grid_lines.len() as u16;

        let title = match self.state.game.puzzle_num {
            Some(num) => format!("Puzzle {num}"),
            None => "Custom Puzzle".to_string(),
        };

        // title + blank + grid + blank + status + spell + blank + footer
        let content_height = grid_height + 7;
        let content_width = grid_width.max(52);

        let [centered_area] = Layout::horizontal([Constraint::Length(content_width + 4)])
            .flex(Flex::Center)
            .areas(area);
        let [centered_area] = Layout::vertical([Constraint::Length(content_height + 2)])
            .flex(Flex::Center)
            .areas(centered_area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.extend(grid_lines);
        lines.push(Line::from(""));

        let status_style = if game.is_solved() {
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.secondary)
        };
        lines.push(Line::from(Span::styled(mode_label(game.mode()), status_style)));

        if game.spell().is_empty() {
            lines.push(Line::from(""));
        } else {
            lines.push(Line::from(vec![
                Span::styled("spell: ", Style::default().fg(theme.dimmed)),
                Span::styled(
                    game.spell().to_string(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        lines.push(Line::from(""));
        let footer = if self.state.game.marked_cell().is_some() {
            vec![
                Span::styled("type a letter  ", Style::default().fg(theme.dimmed)),
                Span::styled("<R>", Style::default().fg(theme.primary)),
                Span::styled(" restart  ", Style::default().fg(theme.dimmed)),
                Span::styled("<ESC>", Style::default().fg(theme.primary)),
                Span::styled(" back", Style::default().fg(theme.dimmed)),
            ]
        } else {
            vec![
                Span::styled("<ENTER>", Style::default().fg(theme.primary)),
                Span::styled(" pick  ", Style::default().fg(theme.dimmed)),
                Span::styled("<R>", Style::default().fg(theme.primary)),
                Span::styled(" restart  ", Style::default().fg(theme.dimmed)),
                Span::styled("<CTRL-H>", Style::default().fg(theme.primary)),
                Span::styled(" help  ", Style::default().fg(theme.dimmed)),
                Span::styled("<ESC>", Style::default().fg(theme.primary)),
                Span::styled(" back", Style::default().fg(theme.dimmed)),
            ]
        };
        lines.push(Line::from(footer));

        frame.render_widget(Paragraph::new(lines).centered(), centered_area);
    }

    pub fn handle_game_input(&mut self, view: GameView, key: KeyEvent) {
        match view {
            GameView::Selecting => self.handle_game_selecting_input(key),
            GameView::Playing => self.handle_game_playing_input(key),
        }
    }

    fn handle_game_selecting_input(&mut self, key: KeyEvent) {
        let count = self.state.catalog.entries().len();
        match key.code {
            KeyCode::Esc => self.set_view(AppView::Menu),
            KeyCode::Up => {
                if self.state.game.sel > 0 {
                    self.state.game.sel -= 1;
                }
            }
            KeyCode::Down => {
                if count != 0 && self.state.game.sel < count - 1 {
                    self.state.game.sel += 1;
                }
            }
            KeyCode::Enter => {
                let Some(entry) = self.state.catalog.entries().get(self.state.game.sel) else {
                    return;
                };
                let (num, text) = (entry.num, entry.puzzle.clone());
                if self.state.game.load_puzzle(Some(num), &text) {
                    self.save_preferences();
                    self.set_view(AppView::Game(GameView::Playing));
                }
            }
            _ => {}
        }
    }

    fn handle_game_playing_input(&mut self, key: KeyEvent) {
        // letter entry into a marked slot takes priority over everything
        // except navigation out of the view
        if !matches!(key.code, KeyCode::Esc) {
            if let Some((row, col)) = self.state.game.marked_cell() {
                if let KeyCode::Char(c) = key.code {
                    if c.is_ascii_alphabetic() && !key.modifiers.contains(KeyModifiers::CONTROL) {
                        if let Some(game) = self.state.game.game.as_mut() {
                            game.end_inputting(row, col, c);
                        }
                        return;
                    }
                }
            }
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('h') | KeyCode::Char('H'))
        {
            self.previous_view = Some(AppView::Game(GameView::Playing));
            self.set_view(AppView::Help);
            return;
        }

        let Some(game) = self.state.game.game.as_mut() else {
            return;
        };
        let (max_row, max_col) = (game.board().max_row(), game.board().max_col());

        match key.code {
            KeyCode::Esc => self.set_view(AppView::Game(GameView::Selecting)),
            KeyCode::Up => {
                if self.state.game.cursor.0 > 0 {
                    self.state.game.cursor.0 -= 1;
                }
            }
            KeyCode::Down => {
                if self.state.game.cursor.0 < max_row {
                    self.state.game.cursor.0 += 1;
                }
            }
            KeyCode::Left => {
                if self.state.game.cursor.1 > 0 {
                    self.state.game.cursor.1 -= 1;
                }
            }
            KeyCode::Right => {
                if self.state.game.cursor.1 < max_col {
                    self.state.game.cursor.1 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.state.game.cursor;
                game.click(row, col);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let text = self.state.game.puzzle_text.clone();
                let num = self.state.game.puzzle_num;
                self.state.game.load_puzzle(num, &text);
            }
            _ => {}
        }
    }
}
