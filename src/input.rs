//! Input boundary.
//!
//! The core never handles key events. It polls a [`Keyboard`] once at the
//! start of each frame and works from the resulting [`Controls`] snapshot.

use std::collections::HashSet;

/// The logical keys the game reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Fire,
}

pub trait Keyboard {
    fn is_key_down(&self, key: Key) -> bool;
}

/// What the player is holding during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub fire: bool,
}

impl Controls {
    pub fn poll(keyboard: &impl Keyboard) -> Self {
        Self {
            left: keyboard.is_key_down(Key::Left),
            up: keyboard.is_key_down(Key::Up),
            right: keyboard.is_key_down(Key::Right),
            down: keyboard.is_key_down(Key::Down),
            fire: keyboard.is_key_down(Key::Fire),
        }
    }
}

/// A keyboard whose held keys are set directly.
#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    held: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }
}

impl Keyboard for HeldKeys {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
