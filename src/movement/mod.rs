//! Movement domain: kinematic body, motion controller and input plumbing.

mod body;
mod controller;
mod input;
mod resources;
mod state;
pub(crate) mod systems;


pub use body::{KinematicBody, Steppable};
pub use controller::MotionController;
pub use input::{InputSnapshot, KeyBindings, KeyState, LogicalKey};
pub use resources::{JumpProfile, MotionTuning};
pub use state::{Facing, MotionState};

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::FrameSet;
use crate::movement::systems::sample_input;

/// A logical key changed held state this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEdge {
    pub key: LogicalKey,
    pub pressed: bool,
}

impl Message for KeyEdge {}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .init_resource::<KeyBindings>()
            .add_message::<KeyEdge>()
            .add_systems(Update, sample_input.in_set(FrameSet::Input));
    }
}
