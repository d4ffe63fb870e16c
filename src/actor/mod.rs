//! Actor domain: composition root for the plumber and its frame systems.

mod components;
mod render;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Actor, FrameHandler, InputHandler, InputReceiver};
pub use render::{RenderState, SpriteSink, SpriteTarget};

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::actor::systems::{
    dispatch_key_edges, log_motion_transitions, spawn_actor, sync_actor_sprites, tick_actors,
};
use crate::core::FrameSet;
use crate::movement::MotionState;

/// Message fired when the actor's motion state changes.
#[derive(Debug, Clone, Copy)]
pub struct MotionStateChanged {
    pub entity: Entity,
    pub from: MotionState,
    pub to: MotionState,
}

impl Message for MotionStateChanged {}

pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MotionStateChanged>()
            .add_systems(Startup, spawn_actor)
            .add_systems(Update, dispatch_key_edges.in_set(FrameSet::Dispatch))
            .add_systems(Update, tick_actors.in_set(FrameSet::Tick))
            .add_systems(
                Update,
                (sync_actor_sprites, log_motion_transitions).in_set(FrameSet::Sync),
            );
    }
}
