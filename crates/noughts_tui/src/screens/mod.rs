//! The app's screens: menu, settings, and the game itself.

mod game;
mod menu;
mod settings;

pub use game::GameScreen;
pub use menu::MenuScreen;
pub use settings::SettingsScreen;
