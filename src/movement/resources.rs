//! Movement domain: motion tuning and the jump profile.

use serde::{Deserialize, Serialize};

/// Per-tick upward impulses applied while a jump is held.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct JumpProfile(Vec<f32>);

impl JumpProfile {
    pub fn new(impulses: Vec<f32>) -> Self {
        Self(impulses)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn impulse(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    pub fn impulses(&self) -> &[f32] {
        &self.0
    }

    /// Net rise of a fully held jump with the given per-tick gravity.
    pub fn apex_height(&self, gravity: f32) -> f32 {
        let mut vy = 0.0;
        let mut height: f32 = 0.0;
        let mut y = 0.0;
        for impulse in &self.0 {
            vy += gravity - impulse;
            y += vy;
            height = height.max(-y);
        }
        height
    }
}

impl Default for JumpProfile {
    fn default() -> Self {
        Self(vec![
            4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 3.0, 3.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ])
    }
}

/// Speeds are in world units per frame; the controller assumes a fixed step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub gravity: f32,
    pub jump_curve: JumpProfile,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            max_speed: 16.0,
            acceleration: 2.0,
            deceleration: 1.0,
            gravity: 1.0,
            jump_curve: JumpProfile::default(),
        }
    }
}
