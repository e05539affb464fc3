//! Game screen — the board, the cursor, and the computer's reply timer.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use noughts_core::{Difficulty, GameConfig, GameMode, GameSession, Outcome, Phase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::Frame;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::input;
use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// A computer reply that has been scheduled but not yet delivered.
#[derive(Debug, Clone, Copy)]
struct PendingReply {
    /// When the reply is due to land.
    due: Instant,
    /// Session generation the reply was scheduled against. A restart
    /// in between bumps the session and strands this value.
    generation: u64,
}

/// State for the game screen.
///
/// The screen owns the reply timer: when the session parks in
/// [`Phase::AiThinking`] a pending reply is recorded, and the
/// controller pumps [`GameScreen::on_tick`] until the delay elapses.
/// Leaving the screen drops the timer with it, so no reply can outlive
/// the game it was scheduled for.
#[derive(Debug, Getters)]
pub struct GameScreen {
    /// The game being played.
    session: GameSession,
    /// Cell the board cursor sits on.
    cursor: usize,
    /// Reply scheduled for delivery, if any.
    #[getter(skip)]
    pending: Option<PendingReply>,
    /// How long the computer "thinks" before each reply.
    #[getter(skip)]
    ai_delay: Duration,
    #[getter(skip)]
    rng: StdRng,
}

impl GameScreen {
    /// Creates a screen running a fresh game.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty, ai_delay: Duration) -> Self {
        debug!("Initializing GameScreen");
        Self {
            session: GameSession::new(GameConfig::new(mode, difficulty)),
            cursor: 4,
            pending: None,
            ai_delay,
            rng: StdRng::seed_from_u64(rand::rng().random()),
        }
    }

    /// Delivers the computer's reply once its thinking delay elapses.
    ///
    /// The controller calls this on every loop pass. A reply whose
    /// generation no longer matches the session (the game was restarted
    /// after scheduling) is dropped without touching the board.
    #[instrument(skip(self))]
    pub fn on_tick(&mut self) {
        let Some(pending) = self.pending else { return };
        if Instant::now() < pending.due {
            return;
        }
        self.pending = None;
        if pending.generation != *self.session.generation() {
            debug!(
                scheduled = pending.generation,
                current = *self.session.generation(),
                "Dropping stale computer reply"
            );
            return;
        }
        if let Some(cell) = self.session.ai_reply(&mut self.rng) {
            info!(cell, "Computer played");
        }
    }

    /// Attempts the human move at `cell` and schedules the computer's
    /// reply when the session locks.
    #[instrument(skip(self))]
    fn try_play(&mut self, cell: usize) {
        match self.session.play(cell) {
            Ok(()) => {
                if *self.session.phase() == Phase::AiThinking {
                    self.schedule_reply();
                }
            }
            // Occupied cell, pending reply, or finished game: the
            // press is ignored.
            Err(error) => debug!(%error, cell, "Move ignored"),
        }
    }

    /// Arms the reply timer against the current session generation.
    #[instrument(skip(self))]
    fn schedule_reply(&mut self) {
        self.pending = Some(PendingReply {
            due: Instant::now() + self.ai_delay,
            generation: *self.session.generation(),
        });
        debug!(
            delay_ms = self.ai_delay.as_millis() as u64,
            "Scheduled computer reply"
        );
    }

    /// Restarts the game, disarming any reply still in flight.
    #[instrument(skip(self))]
    fn restart(&mut self) {
        info!("Restarting game");
        self.pending = None;
        self.session.reset();
    }

    /// The cells to highlight once a line is complete.
    fn winning_line(&self) -> Option<[usize; 3]> {
        match self.session.outcome() {
            Some(Outcome::Won(win)) => Some(*win.line()),
            _ => None,
        }
    }

    /// The status line for the current phase.
    fn status_line(&self) -> String {
        match self.session.phase() {
            Phase::Turn(mark) => match self.session.config().mode() {
                GameMode::Single => "Your move (X)".to_string(),
                GameMode::Multiplayer => format!("{mark} to move"),
            },
            Phase::AiThinking => "Computer is thinking...".to_string(),
            Phase::Over(Outcome::Won(win)) => format!("{} wins!", win.mark()),
            Phase::Over(Outcome::Draw) => "It's a draw!".to_string(),
        }
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        ui::draw(
            frame,
            self.session.board(),
            self.cursor,
            self.winning_line(),
            &self.status_line(),
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.try_play(self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                {
                    self.try_play(digit as usize - 1);
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
                ScreenTransition::Stay
            }
            KeyCode::Esc => {
                info!("Leaving game");
                ScreenTransition::GoToMenu
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
