//! Screen trait and transition type for the app state machine.

use crossterm::event::KeyEvent;
use noughts_core::GameMode;
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`AppController`](crate::AppController) state machine.
#[derive(Debug, Clone, Copy)]
pub enum ScreenTransition {
    /// Stay on the current screen — no state change.
    Stay,
    /// Navigate back to the main menu.
    GoToMenu,
    /// Navigate to the settings screen.
    GoToSettings,
    /// Start a game in the given mode, using the current settings.
    StartGame {
        /// Whether the second player is the computer or a human.
        mode: GameMode,
    },
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the app state machine.
///
/// Each screen owns its own state, renders its UI, and handles key
/// events. The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
