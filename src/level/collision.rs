//! Level domain: axis-separated, unit-step collision resolution.
//!
//! Each axis is corrected independently: the pending speed is stepped down
//! by `resolve_step` until the projected box no longer crosses the edge of a
//! tile ahead of it. The loop is bounded by `max_resolve_steps`; once the
//! budget runs out the speed is clamped straight to the remaining gap.
//!
//! Tolerance: a body never enters a tile it was not already overlapping, and
//! with fractional coordinates it may stop up to one step short of contact.
//! Tiles the body already overlaps are ignored.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::map::CollisionTile;
use crate::movement::KinematicBody;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CollisionTuning {
    pub resolve_step: f32,
    pub max_resolve_steps: u32,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self {
            resolve_step: 1.0,
            max_resolve_steps: 64,
        }
    }
}

/// Corrected velocity and ground contact for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub velocity: Vec2,
    pub on_ground: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CollisionResolver {
    tuning: CollisionTuning,
}

impl CollisionResolver {
    pub fn new(tuning: CollisionTuning) -> Self {
        Self { tuning }
    }

    /// Must run every frame, even at rest, so ground contact is reaffirmed.
    pub fn resolve(
        &self,
        body: &KinematicBody,
        was_on_ground: bool,
        tiles: &[CollisionTile],
    ) -> Resolution {
        let bounds = body.bounds();
        let solid = || tiles.iter().filter(|tile| tile.is_collidable());

        let mut vx = body.velocity.x;
        for tile in solid() {
            if vx == 0.0 {
                break;
            }
            if !spans_overlap(bounds.min.y, bounds.max.y, tile.rect.min.y, tile.rect.max.y) {
                continue;
            }
            if vx > 0.0 && tile.rect.min.x >= bounds.max.x {
                vx = self.approach(vx, tile.rect.min.x - bounds.max.x);
            } else if vx < 0.0 && tile.rect.max.x <= bounds.min.x {
                vx = -self.approach(-vx, bounds.min.x - tile.rect.max.x);
            }
        }

        // Vertical candidates use the horizontally advanced span so a
        // diagonal move cannot slip into a tile corner.
        let (left, right) = (bounds.min.x + vx, bounds.max.x + vx);
        let mut vy = body.velocity.y;
        let mut on_ground = if vy != 0.0 { false } else { was_on_ground };
        for tile in solid() {
            if vy == 0.0 {
                break;
            }
            if !spans_overlap(left, right, tile.rect.min.x, tile.rect.max.x) {
                continue;
            }
            if vy > 0.0 && tile.rect.min.y >= bounds.max.y {
                let gap = tile.rect.min.y - bounds.max.y;
                // Reaching the top edge exactly is contact too.
                if vy >= gap {
                    on_ground = true;
                }
                vy = self.approach(vy, gap);
            } else if vy < 0.0 && tile.rect.max.y <= bounds.min.y {
                vy = -self.approach(-vy, bounds.min.y - tile.rect.max.y);
            }
        }

        Resolution {
            velocity: Vec2::new(vx, vy),
            on_ground,
        }
    }

    /// Steps a positive `speed` down until moving by it no longer crosses
    /// `gap`. Never returns more than the input speed.
    fn approach(&self, speed: f32, gap: f32) -> f32 {
        let step = self.tuning.resolve_step;
        let mut speed = speed;
        let mut steps = 0;
        while speed > gap && speed > 0.0 {
            if steps >= self.tuning.max_resolve_steps {
                return gap.max(0.0);
            }
            speed = (speed - step).max(0.0);
            steps += 1;
        }
        speed
    }
}

/// Open-interval overlap: touching edges do not count.
fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_min < b_max && a_max > b_min
}
