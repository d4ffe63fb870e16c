//! Movement domain: the kinematic body integrated once per frame.

use bevy::prelude::*;

/// Anything that advances its own position by one fixed frame.
pub trait Steppable {
    fn step(&mut self);
}

/// Axis-aligned box moved by velocity in world units per frame.
///
/// `position` is the centre of the box. World space is y-down: positive
/// `velocity.y` falls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl KinematicBody {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Bounding box; `min` is the top-left corner.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }
}

impl Steppable for KinematicBody {
    fn step(&mut self) {
        self.position += self.velocity;
    }
}
