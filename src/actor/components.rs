//! Actor domain: the composed controller and its frame order.

use bevy::prelude::*;

use crate::content::PlumberDef;
use crate::level::{CollisionResolver, TileSource};
use crate::movement::{
    Facing, KeyState, KinematicBody, LogicalKey, MotionController, MotionState, Steppable,
};
use crate::sprites::{AnimationClips, AnimationStateMachine};

use super::render::RenderState;

/// Receives logical key edges.
pub trait InputHandler {
    fn on_key_down(&mut self, key: LogicalKey);
    fn on_key_up(&mut self, key: LogicalKey);
}

/// Advanced exactly once per frame by the tick source.
pub trait FrameHandler {
    fn on_frame(&mut self, input: &impl KeyState, tiles: &impl TileSource);
}

/// Marker registering an entity for key-edge dispatch
#[derive(Component, Debug, Default)]
pub struct InputReceiver;

/// The controllable character: body, motion, collision and animation.
#[derive(Component, Debug, Clone)]
pub struct Actor {
    body: KinematicBody,
    motion: MotionController,
    resolver: CollisionResolver,
    animation: AnimationStateMachine,
    on_ground: bool,
    landed: bool,
    facing: Facing,
}

impl Actor {
    pub fn new(
        body: KinematicBody,
        motion: MotionController,
        resolver: CollisionResolver,
        animation: AnimationStateMachine,
    ) -> Self {
        Self {
            body,
            motion,
            resolver,
            animation,
            on_ground: false,
            landed: false,
            facing: Facing::Right,
        }
    }

    pub fn from_def(def: &PlumberDef, clips: AnimationClips) -> Self {
        Self::new(
            KinematicBody::new(def.body.spawn.into(), def.body.size.into()),
            MotionController::new(def.motion.clone()),
            CollisionResolver::new(def.collision.clone()),
            AnimationStateMachine::new(clips, def.animation.frames_per_step),
        )
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    pub fn state(&self) -> MotionState {
        self.animation.state()
    }

    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn is_jumping(&self) -> bool {
        self.motion.is_jumping()
    }

    /// Whether the last frame ended a jump.
    pub fn just_landed(&self) -> bool {
        self.landed
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            position: self.body.position,
            size: self.body.size,
            flip_x: self.facing.is_mirrored(),
            region: self.animation.region(),
        }
    }
}

impl InputHandler for Actor {
    fn on_key_down(&mut self, key: LogicalKey) {
        if key != LogicalKey::Up || !self.on_ground || self.motion.is_jumping() {
            return;
        }
        self.motion.start_jump();
        self.animation
            .enter_jump(self.body.velocity.x, self.motion.max_speed());
    }

    fn on_key_up(&mut self, key: LogicalKey) {
        if key == LogicalKey::Up {
            self.motion.release_jump();
        }
    }
}

impl FrameHandler for Actor {
    fn on_frame(&mut self, input: &impl KeyState, tiles: &impl TileSource) {
        let vx = self.motion.horizontal(self.body.velocity.x, input);
        let vy = self.motion.vertical(self.body.velocity.y);
        self.body.velocity = Vec2::new(vx, vy);

        let resolution = self
            .resolver
            .resolve(&self.body, self.on_ground, tiles.collision_tiles());
        self.body.velocity = resolution.velocity;
        self.on_ground = resolution.on_ground;

        self.animation
            .reclassify(self.body.velocity.x, self.motion.max_speed());
        self.animation.advance();

        self.body.step();

        self.landed = self
            .animation
            .land(self.on_ground, self.motion.is_jumping());

        self.facing = Facing::from_motion(self.body.velocity.x, input.is_held(LogicalKey::Left));
    }
}
