//! Keyboard state
//!
//! Key events may arrive at any time between frames; the adapter only
//! records press state. Once per frame the host takes a [`TickInput`]
//! snapshot, so the simulation never sees event timing.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Charge,
    Restart,
}

impl Key {
    /// Map a browser `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Charge),
            "KeyR" => Some(Key::Restart),
            _ => None,
        }
    }

    /// Whether the host should suppress the browser's default action
    pub fn captures_default(&self) -> bool {
        !matches!(self, Key::Restart)
    }
}

/// Current press state of the game keys
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    left: bool,
    right: bool,
    charge: bool,
    /// Latched until the next snapshot
    restart: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Handle a raw key code; returns the key if it is one of ours
    pub fn handle_code(&mut self, code: &str, pressed: bool) -> Option<Key> {
        let key = Key::from_code(code)?;
        self.set(key, pressed);
        Some(key)
    }

    fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::Charge => self.charge = pressed,
            // A restart tap is never lost, even if released before the next frame
            Key::Restart => self.restart |= pressed,
        }
    }

    /// Input for the next tick. Restart is one-shot and is cleared here.
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            charge: self.charge,
            restart: self.restart,
        };
        self.restart = false;
        input
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("Space"), Some(Key::Charge));
        assert_eq!(Key::from_code("KeyQ"), None);
        assert!(!Key::Restart.captures_default());
        assert!(Key::Charge.captures_default());
    }

    #[test]
    fn test_held_keys_persist_across_snapshots() {
        let mut adapter = InputAdapter::new();
        adapter.key_down(Key::Charge);
        adapter.key_down(Key::Right);
        assert!(adapter.snapshot().charge);
        let second = adapter.snapshot();
        assert!(second.charge && second.right);

        adapter.key_up(Key::Charge);
        assert!(!adapter.snapshot().charge);
    }

    #[test]
    fn test_restart_is_one_shot() {
        let mut adapter = InputAdapter::new();
        adapter.key_down(Key::Restart);
        adapter.key_up(Key::Restart);
        assert!(adapter.snapshot().restart);
        assert!(!adapter.snapshot().restart);
    }

    #[test]
    fn test_handle_code() {
        let mut adapter = InputAdapter::new();
        assert_eq!(adapter.handle_code("ArrowLeft", true), Some(Key::Left));
        assert_eq!(adapter.handle_code("Tab", true), None);
        assert!(adapter.snapshot().left);
        adapter.clear();
        assert_eq!(adapter.snapshot(), TickInput::default());
    }
}
