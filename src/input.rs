//! Input accumulation.
//!
//! The frame loop feeds discrete press/release events into [`InputState`],
//! which the simulation step reads once per tick.  [`KeyTracker`] turns raw
//! terminal key events into those press/release events.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
    Quit,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Press(Action),
    Release(Action),
}

/// Held-key state plus the edge-triggered flags consumed by the step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputState {
    left: bool,
    right: bool,
    fire_pressed: bool,
    restart: bool,
    running: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: false,
            right: false,
            fire_pressed: false,
            restart: false,
            running: true,
        }
    }
}

impl InputState {
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(Action::MoveLeft) => self.left = true,
            InputEvent::Release(Action::MoveLeft) => self.left = false,
            InputEvent::Press(Action::MoveRight) => self.right = true,
            InputEvent::Release(Action::MoveRight) => self.right = false,
            InputEvent::Press(Action::Fire) => self.fire_pressed = true,
            InputEvent::Press(Action::Quit) => self.running = false,
            InputEvent::Press(Action::Restart) => self.restart = true,
            InputEvent::Release(_) => {}
        }
    }

    /// Net horizontal direction: -1, 0 or 1.
    pub fn move_dir(&self) -> i32 {
        self.right as i32 - self.left as i32
    }

    /// Returns the fire flag and clears it.
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_pressed)
    }

    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    pub fn running(&self) -> bool {
        self.running
    }
}

// ── Terminal key mapping ──────────────────────────────────────────────────────

/// Map a terminal key to a game action.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::MoveRight),
        KeyCode::Char(' ') => Some(Action::Fire),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        _ => None,
    }
}

/// Converts terminal key events into press/release events.
///
/// Terminals with keyboard enhancement report `Press`, `Repeat` and
/// `Release`.  Classic terminals only send `Press` (OS key-repeat shows up as
/// repeated presses), so with a hold window set, a held action is released
/// once no event for it has arrived within that many frames.
#[derive(Debug)]
pub struct KeyTracker {
    /// Maps each held action to the frame it was last seen.
    last_seen: HashMap<Action, u64>,
    hold_window: Option<u64>,
}

impl KeyTracker {
    pub fn new(hold_window: Option<u64>) -> Self {
        Self {
            last_seen: HashMap::new(),
            hold_window,
        }
    }

    /// Feed one key event seen on `frame`.  A press of an action that is
    /// already held only refreshes it, so holding fire shoots once.
    pub fn key_event(&mut self, key: &KeyEvent, frame: u64) -> Option<InputEvent> {
        let action = action_for(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(action, frame).is_none().then_some(InputEvent::Press(action))
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&action).map(|_| InputEvent::Release(action))
            }
        }
    }

    /// Release every action not refreshed within the hold window.
    pub fn expire(&mut self, frame: u64) -> Vec<InputEvent> {
        let Some(window) = self.hold_window else {
            return Vec::new();
        };
        let mut released = Vec::new();
        self.last_seen.retain(|&action, &mut last| {
            let held = frame.saturating_sub(last) <= window;
            if !held {
                released.push(InputEvent::Release(action));
            }
            held
        });
        released
    }
}
