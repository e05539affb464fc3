//! Settings screen — configure the computer opponent's difficulty.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::settings::Settings;

/// State for the settings screen.
#[derive(Debug)]
pub struct SettingsScreen {
    settings: Settings,
    list_state: ListState,
}

impl SettingsScreen {
    /// Creates a new settings screen pre-populated with the current settings.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        debug!("Initializing SettingsScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            settings,
            list_state,
        }
    }

    /// Returns the current settings (called by the controller on transition out).
    #[instrument(skip(self))]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Toggles the computer difficulty setting.
    #[instrument(skip(self))]
    fn toggle_difficulty(&mut self) {
        self.settings.difficulty = self.settings.difficulty.toggle();
        info!(
            difficulty = %self.settings.difficulty.label(),
            "Toggled difficulty setting"
        );
    }
}

impl Screen for SettingsScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Settings")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let difficulty_label = format!(
            "Computer Difficulty    [ {} ]",
            self.settings.difficulty.label()
        );
        let items = vec![ListItem::new(difficulty_label)];

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Preferences"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new("←→ / Enter: Toggle | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.toggle_difficulty();
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Leaving settings screen");
                ScreenTransition::GoToMenu
            }
            _ => ScreenTransition::Stay,
        }
    }
}
