//! Terminal tic-tac-toe.
//!
//! The app is a small screen state machine driven by
//! [`AppController`]: a menu, a settings screen, and the game screen
//! itself. Game rules live in `noughts_core`; this crate owns
//! rendering, input, and the computer's thinking delay.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod controller;
mod input;
mod screen;
mod screens;
mod settings;
mod ui;

pub use cli::Cli;
pub use controller::AppController;
pub use screen::{Screen, ScreenTransition};
pub use screens::{GameScreen, MenuScreen, SettingsScreen};
pub use settings::Settings;
