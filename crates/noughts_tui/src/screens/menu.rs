//! Main menu screen — pick a game mode or open the settings.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use noughts_core::GameMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};

/// Options available in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    SinglePlayer,
    Multiplayer,
    Settings,
    Quit,
}

impl MenuOption {
    #[instrument]
    fn label(self) -> &'static str {
        match self {
            Self::SinglePlayer => "Single Player",
            Self::Multiplayer => "Multiplayer",
            Self::Settings => "Settings",
            Self::Quit => "Quit",
        }
    }

    #[instrument]
    fn all() -> &'static [MenuOption] {
        &[
            Self::SinglePlayer,
            Self::Multiplayer,
            Self::Settings,
            Self::Quit,
        ]
    }
}

/// State for the main menu screen.
#[derive(Debug, Getters)]
pub struct MenuScreen {
    list_state: ListState,
}

impl MenuScreen {
    /// Creates a new menu screen with the first option selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MenuScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    /// Moves selection up.
    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected menu option.
    #[instrument(skip(self))]
    fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Noughts — Tic Tac Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::SinglePlayer => ScreenTransition::StartGame {
                        mode: GameMode::Single,
                    },
                    MenuOption::Multiplayer => ScreenTransition::StartGame {
                        mode: GameMode::Multiplayer,
                    },
                    MenuOption::Settings => ScreenTransition::GoToSettings,
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
