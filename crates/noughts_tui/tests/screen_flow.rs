//! Screen state machine tests: menu navigation, settings extraction,
//! and the game screen's reply timer.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts_core::{Cell, Difficulty, GameMode, Mark, Phase};
use noughts_tui::{GameScreen, MenuScreen, Screen, ScreenTransition, Settings, SettingsScreen};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_menu_enter_starts_single_player() {
    let mut menu = MenuScreen::new();
    match menu.handle_key(press(KeyCode::Enter)) {
        ScreenTransition::StartGame { mode } => assert_eq!(mode, GameMode::Single),
        other => panic!("unexpected transition {other:?}"),
    }
}

#[test]
fn test_menu_down_selects_multiplayer() {
    let mut menu = MenuScreen::new();
    assert!(matches!(
        menu.handle_key(press(KeyCode::Down)),
        ScreenTransition::Stay
    ));
    match menu.handle_key(press(KeyCode::Enter)) {
        ScreenTransition::StartGame { mode } => assert_eq!(mode, GameMode::Multiplayer),
        other => panic!("unexpected transition {other:?}"),
    }
}

#[test]
fn test_menu_selection_wraps_to_quit() {
    let mut menu = MenuScreen::new();
    menu.handle_key(press(KeyCode::Up));
    assert!(matches!(
        menu.handle_key(press(KeyCode::Enter)),
        ScreenTransition::Quit
    ));
}

#[test]
fn test_menu_q_quits() {
    let mut menu = MenuScreen::new();
    assert!(matches!(
        menu.handle_key(press(KeyCode::Char('q'))),
        ScreenTransition::Quit
    ));
}

#[test]
fn test_settings_toggle_and_extract() {
    let mut screen = SettingsScreen::new(Settings::default());
    assert_eq!(screen.settings().difficulty, Difficulty::Easy);

    screen.handle_key(press(KeyCode::Enter));
    assert_eq!(screen.settings().difficulty, Difficulty::Hard);
    screen.handle_key(press(KeyCode::Left));
    assert_eq!(screen.settings().difficulty, Difficulty::Easy);

    assert!(matches!(
        screen.handle_key(press(KeyCode::Esc)),
        ScreenTransition::GoToMenu
    ));
}

#[test]
fn test_digit_keys_place_marks_in_multiplayer() {
    let mut game = GameScreen::new(GameMode::Multiplayer, Difficulty::Easy, Duration::ZERO);
    game.handle_key(press(KeyCode::Char('5')));
    assert_eq!(game.session().board().get(4), Some(Cell::Marked(Mark::X)));
    game.handle_key(press(KeyCode::Char('1')));
    assert_eq!(game.session().board().get(0), Some(Cell::Marked(Mark::O)));
}

#[test]
fn test_cursor_moves_and_enter_places() {
    let mut game = GameScreen::new(GameMode::Multiplayer, Difficulty::Easy, Duration::ZERO);
    assert_eq!(*game.cursor(), 4);
    game.handle_key(press(KeyCode::Up));
    assert_eq!(*game.cursor(), 1);
    game.handle_key(press(KeyCode::Enter));
    assert_eq!(game.session().board().get(1), Some(Cell::Marked(Mark::X)));
}

#[tokio::test]
async fn test_zero_delay_reply_lands_on_next_tick() {
    let mut game = GameScreen::new(GameMode::Single, Difficulty::Hard, Duration::ZERO);
    game.handle_key(press(KeyCode::Char('1')));
    assert_eq!(*game.session().phase(), Phase::AiThinking);

    game.on_tick();
    assert_eq!(*game.session().phase(), Phase::Turn(Mark::X));
    assert_eq!(game.session().history().len(), 2);
}

#[tokio::test]
async fn test_restart_cancels_scheduled_reply() {
    let mut game = GameScreen::new(GameMode::Single, Difficulty::Easy, Duration::ZERO);
    game.handle_key(press(KeyCode::Char('1')));
    assert_eq!(*game.session().phase(), Phase::AiThinking);

    game.handle_key(press(KeyCode::Char('r')));
    // The reply scheduled before the restart must never land.
    game.on_tick();
    assert_eq!(*game.session().phase(), Phase::Turn(Mark::X));
    assert_eq!(game.session().board().empty_cells().count(), 9);
    assert!(game.session().history().is_empty());
}

#[tokio::test]
async fn test_input_ignored_while_thinking() {
    let mut game = GameScreen::new(GameMode::Single, Difficulty::Easy, Duration::from_secs(60));
    game.handle_key(press(KeyCode::Char('1')));
    game.handle_key(press(KeyCode::Char('2')));
    // The reply is not due for another minute; nothing may change.
    game.on_tick();
    assert_eq!(*game.session().phase(), Phase::AiThinking);
    assert_eq!(game.session().history().len(), 1);
    assert!(game.session().board().is_empty(1));
}

#[test]
fn test_esc_leaves_the_game() {
    let mut game = GameScreen::new(GameMode::Multiplayer, Difficulty::Easy, Duration::ZERO);
    assert!(matches!(
        game.handle_key(press(KeyCode::Esc)),
        ScreenTransition::GoToMenu
    ));
}
