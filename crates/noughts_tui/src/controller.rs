//! App controller — the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, MenuScreen, SettingsScreen};
use crate::settings::Settings;

/// Active screen in the app state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    Settings(SettingsScreen),
    Game(GameScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`AppController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct AppController {
    /// Preferences carried between games.
    settings: Settings,
    /// Thinking delay handed to each new game.
    ai_delay: Duration,
}

impl AppController {
    /// Creates a new app controller.
    #[instrument]
    pub fn new(ai_delay: Duration) -> Self {
        info!("Creating AppController");
        Self {
            settings: Settings::new(),
            ai_delay,
        }
    }

    /// Runs the app event loop until the user quits.
    ///
    /// Drives rendering, input, and the computer's reply timer. The
    /// caller owns terminal setup and restore.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting app event loop");

        let mut screen = ActiveScreen::Menu(MenuScreen::new());

        loop {
            // Render current screen.
            terminal.draw(|f| match &screen {
                ActiveScreen::Menu(s) => s.render(f),
                ActiveScreen::Settings(s) => s.render(f),
                ActiveScreen::Game(s) => s.render(f),
            })?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Menu(s) => s.handle_key(key),
                    ActiveScreen::Settings(s) => s.handle_key(key),
                    ActiveScreen::Game(s) => s.handle_key(key),
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("App quitting");
                        return Ok(());
                    }
                };
            }

            // Deliver any computer reply that has come due.
            if let ActiveScreen::Game(s) = &mut screen {
                s.on_tick();
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToMenu => {
                // Persist any settings changes if returning from the Settings screen.
                if let Some(updated) = self.extract_settings_from_screen(&current) {
                    debug!(
                        difficulty = %updated.difficulty.label(),
                        "Saving updated settings"
                    );
                    self.settings = updated;
                }
                info!("Navigating to Menu");
                Some(ActiveScreen::Menu(MenuScreen::new()))
            }

            ScreenTransition::GoToSettings => {
                info!("Navigating to Settings");
                Some(ActiveScreen::Settings(SettingsScreen::new(self.settings)))
            }

            ScreenTransition::StartGame { mode } => {
                info!(
                    mode = %mode.label(),
                    difficulty = %self.settings.difficulty.label(),
                    "Starting game"
                );
                Some(ActiveScreen::Game(GameScreen::new(
                    mode,
                    self.settings.difficulty,
                    self.ai_delay,
                )))
            }

            ScreenTransition::Quit => None,
        }
    }

    /// Extracts updated settings from the settings screen when navigating away.
    #[instrument(skip(self, screen))]
    fn extract_settings_from_screen(&self, screen: &ActiveScreen) -> Option<Settings> {
        match screen {
            ActiveScreen::Settings(s) => Some(s.settings()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use noughts_core::{Difficulty, GameMode};

    fn controller() -> AppController {
        AppController::new(Duration::from_millis(500))
    }

    #[test]
    fn test_settings_survive_returning_to_menu() {
        let mut controller = controller();
        assert_eq!(controller.settings().difficulty, Difficulty::Easy);

        // The user toggles difficulty on the settings screen and backs out.
        let mut screen = SettingsScreen::new(*controller.settings());
        screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let next = controller
            .apply_transition(ScreenTransition::GoToMenu, ActiveScreen::Settings(screen))
            .unwrap();

        assert!(matches!(next, ActiveScreen::Menu(_)));
        assert_eq!(controller.settings().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_started_game_carries_saved_settings() {
        let mut controller = controller();
        controller.settings.difficulty = Difficulty::Hard;

        let next = controller
            .apply_transition(
                ScreenTransition::StartGame {
                    mode: GameMode::Single,
                },
                ActiveScreen::Menu(MenuScreen::new()),
            )
            .unwrap();

        let ActiveScreen::Game(game) = next else {
            panic!("expected a game screen");
        };
        assert_eq!(*game.session().config().mode(), GameMode::Single);
        assert_eq!(*game.session().config().difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_quit_transition_ends_the_machine() {
        let mut controller = controller();
        let next =
            controller.apply_transition(ScreenTransition::Quit, ActiveScreen::Menu(MenuScreen::new()));
        assert!(next.is_none());
    }

    #[test]
    fn test_stay_keeps_the_current_screen() {
        let mut controller = controller();
        let next = controller
            .apply_transition(ScreenTransition::Stay, ActiveScreen::Menu(MenuScreen::new()))
            .unwrap();
        assert!(matches!(next, ActiveScreen::Menu(_)));
    }
}
