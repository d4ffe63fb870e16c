//! Movement domain: horizontal acceleration and the jump-arc vertical model.

use super::input::{KeyState, LogicalKey};
use super::resources::MotionTuning;

/// Computes the next velocity from held keys and jump progress.
#[derive(Debug, Clone)]
pub struct MotionController {
    tuning: MotionTuning,
    jumping: bool,
    jump_index: usize,
}

impl MotionController {
    pub fn new(tuning: MotionTuning) -> Self {
        Self {
            tuning,
            jumping: false,
            jump_index: 0,
        }
    }

    pub fn max_speed(&self) -> f32 {
        self.tuning.max_speed
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Position in the jump profile, always within `0..=len`.
    pub fn jump_index(&self) -> usize {
        self.jump_index
    }

    pub fn clamp(&self, speed: f32) -> f32 {
        speed.clamp(-self.tuning.max_speed, self.tuning.max_speed)
    }

    pub fn horizontal(&self, vx: f32, input: &impl KeyState) -> f32 {
        let left = input.is_held(LogicalKey::Left);
        let right = input.is_held(LogicalKey::Right);
        let decel = self.tuning.deceleration;

        if left && right && vx != 0.0 {
            let braked = if vx > 0.0 {
                (vx - decel).max(0.0)
            } else {
                (vx + decel).min(0.0)
            };
            return self.clamp(braked);
        }

        // Both adjustments are taken from the same starting speed.
        let mut delta = 0.0;
        if right {
            delta += self.tuning.acceleration;
        } else if vx > 0.0 {
            delta -= decel.min(vx);
        }
        if left {
            delta -= self.tuning.acceleration;
        } else if vx < 0.0 {
            delta += decel.min(-vx);
        }

        self.clamp(vx + delta)
    }

    pub fn vertical(&mut self, vy: f32) -> f32 {
        let mut vy = vy + self.tuning.gravity;

        match self.tuning.jump_curve.impulse(self.jump_index) {
            Some(impulse) if self.jumping => {
                vy -= impulse;
                self.jump_index += 1;
            }
            _ if self.jump_index > 0 => {
                // Decay: walk back down the curve without pushing.
                self.jump_index -= 1;
            }
            _ => self.jumping = false,
        }

        self.clamp(vy)
    }

    /// Starts a jump from the front of the profile.
    pub fn start_jump(&mut self) {
        self.jumping = true;
        self.jump_index = 0;
    }

    /// Stops pushing; the arc keeps decaying through `vertical`.
    pub fn release_jump(&mut self) {
        self.jumping = false;
    }
}
