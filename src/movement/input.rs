//! Movement domain: logical keys, bindings and the per-frame input snapshot.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Device-independent key the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
    Up,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 3] = [LogicalKey::Left, LogicalKey::Right, LogicalKey::Up];
}

/// Read-only "is this key currently held" query.
pub trait KeyState {
    fn is_held(&self, key: LogicalKey) -> bool;
}

/// Held state of every logical key, sampled once per frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl InputSnapshot {
    pub fn holding(keys: &[LogicalKey]) -> Self {
        let mut snapshot = Self::default();
        for key in keys {
            snapshot.set(*key, true);
        }
        snapshot
    }

    pub fn set(&mut self, key: LogicalKey, held: bool) {
        match key {
            LogicalKey::Left => self.left = held,
            LogicalKey::Right => self.right = held,
            LogicalKey::Up => self.up = held,
        }
    }

    /// Keys whose held state differs from `previous`, with the new state.
    pub fn changes_since(&self, previous: &InputSnapshot) -> Vec<(LogicalKey, bool)> {
        LogicalKey::ALL
            .into_iter()
            .filter(|key| self.is_held(*key) != previous.is_held(*key))
            .map(|key| (key, self.is_held(key)))
            .collect()
    }
}

impl KeyState for InputSnapshot {
    fn is_held(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::Left => self.left,
            LogicalKey::Right => self.right,
            LogicalKey::Up => self.up,
        }
    }
}

/// Raw key codes bound to each logical key.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KeyBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub up: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
            up: vec![KeyCode::ArrowUp, KeyCode::KeyW, KeyCode::Space],
        }
    }
}

impl KeyBindings {
    pub fn codes(&self, key: LogicalKey) -> &[KeyCode] {
        match key {
            LogicalKey::Left => &self.left,
            LogicalKey::Right => &self.right,
            LogicalKey::Up => &self.up,
        }
    }

    pub fn snapshot(&self, keyboard: &ButtonInput<KeyCode>) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        for key in LogicalKey::ALL {
            snapshot.set(key, keyboard.any_pressed(self.codes(key).iter().copied()));
        }
        snapshot
    }
}
