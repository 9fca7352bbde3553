use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use space_invaders::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

// ── InputState ────────────────────────────────────────────────────────────────

#[test]
fn move_dir_tracks_held_keys() {
    let mut input = InputState::default();
    assert_eq!(input.move_dir(), 0);
    input.apply(InputEvent::Press(Action::MoveLeft));
    assert_eq!(input.move_dir(), -1);
    input.apply(InputEvent::Press(Action::MoveRight));
    assert_eq!(input.move_dir(), 0);
    input.apply(InputEvent::Release(Action::MoveLeft));
    assert_eq!(input.move_dir(), 1);
    input.apply(InputEvent::Release(Action::MoveRight));
    assert_eq!(input.move_dir(), 0);
}

#[test]
fn repeated_press_does_not_accumulate() {
    let mut input = InputState::default();
    input.apply(InputEvent::Press(Action::MoveRight));
    input.apply(InputEvent::Press(Action::MoveRight));
    input.apply(InputEvent::Release(Action::MoveRight));
    assert_eq!(input.move_dir(), 0);
}

#[test]
fn fire_flag_is_taken_once() {
    let mut input = InputState::default();
    assert!(!input.take_fire());
    input.apply(InputEvent::Press(Action::Fire));
    input.apply(InputEvent::Release(Action::Fire));
    assert!(input.take_fire());
    assert!(!input.take_fire());
}

#[test]
fn quit_stops_running() {
    let mut input = InputState::default();
    assert!(input.running());
    input.apply(InputEvent::Press(Action::Quit));
    assert!(!input.running());
}

#[test]
fn restart_flag_is_taken_once() {
    let mut input = InputState::default();
    input.apply(InputEvent::Press(Action::Restart));
    assert!(input.take_restart());
    assert!(!input.take_restart());
}

// ── Key mapping ───────────────────────────────────────────────────────────────

#[test]
fn keys_map_to_actions() {
    assert_eq!(action_for(&press(KeyCode::Left)), Some(Action::MoveLeft));
    assert_eq!(action_for(&press(KeyCode::Char('a'))), Some(Action::MoveLeft));
    assert_eq!(action_for(&press(KeyCode::Right)), Some(Action::MoveRight));
    assert_eq!(action_for(&press(KeyCode::Char('D'))), Some(Action::MoveRight));
    assert_eq!(action_for(&press(KeyCode::Char(' '))), Some(Action::Fire));
    assert_eq!(action_for(&press(KeyCode::Esc)), Some(Action::Quit));
    assert_eq!(action_for(&press(KeyCode::Char('q'))), Some(Action::Quit));
    assert_eq!(action_for(&press(KeyCode::Char('r'))), Some(Action::Restart));
    assert_eq!(action_for(&press(KeyCode::Char('c'))), None);
    assert_eq!(action_for(&press(KeyCode::Up)), None);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(action_for(&ctrl_c), Some(Action::Quit));
}

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn tracker_reports_press_once_while_held() {
    let mut keys = KeyTracker::new(None);
    assert_eq!(keys.key_event(&press(KeyCode::Char(' ')), 1), Some(InputEvent::Press(Action::Fire)));
    assert_eq!(keys.key_event(&press(KeyCode::Char(' ')), 2), None);
    let repeat = KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(keys.key_event(&repeat, 3), None);
    assert_eq!(keys.key_event(&release(KeyCode::Char(' ')), 4), Some(InputEvent::Release(Action::Fire)));
    assert_eq!(keys.key_event(&press(KeyCode::Char(' ')), 5), Some(InputEvent::Press(Action::Fire)));
}

#[test]
fn tracker_ignores_unmapped_keys_and_stray_releases() {
    let mut keys = KeyTracker::new(None);
    assert_eq!(keys.key_event(&press(KeyCode::Up), 1), None);
    assert_eq!(keys.key_event(&release(KeyCode::Left), 1), None);
}

#[test]
fn arrow_and_letter_share_one_hold() {
    let mut keys = KeyTracker::new(None);
    assert_eq!(keys.key_event(&press(KeyCode::Left), 1), Some(InputEvent::Press(Action::MoveLeft)));
    assert_eq!(keys.key_event(&press(KeyCode::Char('a')), 1), None);
}

#[test]
fn tracker_without_window_never_expires() {
    let mut keys = KeyTracker::new(None);
    keys.key_event(&press(KeyCode::Left), 1);
    assert!(keys.expire(1_000).is_empty());
}

#[test]
fn tracker_expires_stale_keys() {
    let mut keys = KeyTracker::new(Some(4));
    keys.key_event(&press(KeyCode::Left), 10);
    keys.key_event(&press(KeyCode::Right), 12);
    assert!(keys.expire(14).is_empty());
    assert_eq!(keys.expire(15), vec![InputEvent::Release(Action::MoveLeft)]);

    // A refresh keeps the key held.
    keys.key_event(&press(KeyCode::Right), 16);
    assert!(keys.expire(20).is_empty());
    assert_eq!(keys.expire(21), vec![InputEvent::Release(Action::MoveRight)]);
    assert!(keys.expire(100).is_empty());
}

#[test]
fn expired_key_can_be_pressed_again() {
    let mut keys = KeyTracker::new(Some(2));
    keys.key_event(&press(KeyCode::Char(' ')), 1);
    keys.expire(10);
    assert_eq!(keys.key_event(&press(KeyCode::Char(' ')), 11), Some(InputEvent::Press(Action::Fire)));
}
