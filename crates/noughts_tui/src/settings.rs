//! App settings — user-configurable preferences carried between games.

use noughts_core::Difficulty;
use tracing::instrument;

/// User-configurable settings for the app.
///
/// Settings live on the controller and are handed to each new game;
/// changing them never affects a game already in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Difficulty used for new single-player games.
    pub difficulty: Difficulty,
}

impl Settings {
    /// Creates a new `Settings` with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}
