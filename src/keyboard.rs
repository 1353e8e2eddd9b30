//! Terminal keyboard.
//!
//! Terminals that support keyboard enhancement report press, repeat and
//! release events, so a key is dropped as soon as it is released. Classic
//! terminals only repeat presses while a key is held; there a key counts as
//! held if its last press arrived within `hold_window` frames.

use std::collections::HashMap;

use crossterm::event::KeyCode;
use star_box::input::{Key, Keyboard};

pub struct TerminalKeyboard {
    key_frame: HashMap<Key, u64>,
    frame: u64,
    hold_window: u64,
}

impl TerminalKeyboard {
    pub fn new(hold_window: u64) -> Self {
        Self {
            key_frame: HashMap::new(),
            frame: 0,
            hold_window,
        }
    }

    /// Moves the hold window along to `frame`.
    pub fn set_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    /// Records a press or repeat of `code` during the current frame.
    pub fn press(&mut self, code: KeyCode) {
        if let Some(key) = logical_key(code) {
            self.key_frame.insert(key, self.frame);
        }
    }

    pub fn release(&mut self, code: KeyCode) {
        if let Some(key) = logical_key(code) {
            self.key_frame.remove(&key);
        }
    }
}

impl Keyboard for TerminalKeyboard {
    fn is_key_down(&self, key: Key) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }
}

/// Arrow keys or WASD steer, Space fires.
fn logical_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Fire),
        _ => None,
    }
}
