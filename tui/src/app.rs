use crate::{
    editor::EditorState,
    game::{GameState, GameView},
    menu::MenuState,
    preferences::{self, Preferences},
    theme::Theme,
    theme_select::ThemeSelectState,
};
use color_eyre::eyre::Result;
use crossterm::event::EventStream;
use lok_catalog::Catalog;
use std::time::Duration;

#[derive(Default, Clone, Debug, PartialEq)]
pub enum AppView {
    #[default]
    Menu,
    Game(GameView),
    Editor,
    ThemeSelect,
    Help,
}

#[derive(Debug)]
pub struct AppState {
    pub menu: MenuState,
    pub game: GameState,
    pub editor: EditorState,
    pub theme_select: ThemeSelectState,
    /// Active color theme.
    pub theme: Theme,
    /// Loaded puzzle catalog.
    pub catalog: Catalog,
}

/// 35 FPS = 1000ms / 35
const FPS_RATE: Duration = Duration::from_millis(1000 / 35);

pub struct App {
    /// Active application view.
    pub view: AppView,
    /// View to return to when leaving the help screen.
    pub previous_view: Option<AppView>,
    /// Application state.
    ///
    /// This is shared among all views.
    pub state: AppState,
    /// Is the application running?
    pub is_running: bool,
    /// Event stream.
    pub event_stream: EventStream,
}

impl App {
    /// Construct a new instance of [`App`], loading the catalog and the
    /// saved preferences.
    pub fn new() -> Self {
        let prefs = preferences::load_preferences();
        let game = GameState {
            puzzle_num: prefs.last_puzzle,
            ..GameState::default()
        };
        Self {
            view: AppView::Menu,
            previous_view: None,
            state: AppState {
                menu: MenuState::default(),
                game,
                editor: EditorState::default(),
                theme_select: ThemeSelectState::default(),
                theme: Theme::by_id(&prefs.theme_id),
                catalog: Catalog::load(),
            },
            is_running: false,
            event_stream: EventStream::new(),
        }
    }

    /// Set the active view.
    pub fn set_view(&mut self, view: AppView) {
        self.view = view;
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        self.is_running = true;

        // ticker for redraws between input events
        let mut interval = tokio::time::interval(FPS_RATE);

        while self.is_running {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                _ = interval.tick() => {
                    // trigger a redraw by looping
                    continue;
                }
                result = self.handle_crossterm_events() => {
                    result?;
                }
            }
        }

        Ok(())
    }

    /// Renders the user interface.
    fn draw(&mut self, frame: &mut ratatui::Frame) {
        match self.view.clone() {
            AppView::Menu => self.draw_menu(frame),
            AppView::Game(view) => self.draw_game(view, frame),
            AppView::Editor => self.draw_editor(frame),
            AppView::ThemeSelect => self.draw_theme_select(frame),
            AppView::Help => self.draw_help(frame),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> Result<()> {
        use crossterm::event::{Event, KeyEventKind, KeyModifiers};
        use futures::{FutureExt, StreamExt};

        let event = self.event_stream.next().fuse().await;
        match event {
            Some(Ok(evt)) => match evt {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    use crossterm::event::KeyCode;

                    // application-wide CTRL+C handler
                    if matches!(
                        (key.modifiers, key.code),
                        (
                            KeyModifiers::CONTROL,
                            KeyCode::Char('c') | KeyCode::Char('C')
                        )
                    ) {
                        self.quit();
                        return Ok(());
                    };

                    match self.view.clone() {
                        AppView::Menu => self.handle_menu_input(key),
                        AppView::Game(view) => self.handle_game_input(view, key),
                        AppView::Editor => self.handle_editor_input(key),
                        AppView::ThemeSelect => self.handle_theme_select_input(key),
                        AppView::Help => self.handle_help_input(key),
                    }
                }
                Event::Mouse(_) => {} // no mouse events
                Event::Resize(_, _) => {}
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }

    /// Persist the current preferences, ignoring write failures.
    pub fn save_preferences(&self) {
        let prefs = Preferences {
            theme_id: self.state.theme.id.to_string(),
            last_puzzle: self.state.game.puzzle_num,
        };
        let _ = preferences::save_preferences(&prefs);
    }

    /// Set running to false to quit the application, persisting preferences.
    pub fn quit(&mut self) {
        self.save_preferences();
        self.is_running = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
