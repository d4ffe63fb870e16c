//! Tiny Plumber: a frame-stepped platformer character controller on bevy.
//!
//! The controller core (body, motion, collision, animation and the actor
//! that composes them) is plain Rust driven once per frame; the plugins
//! wire it to bevy's keyboard input, tile sprites and the actor sprite.

pub mod actor;
pub mod content;
pub mod core;
pub mod level;
pub mod movement;
pub mod sprites;

use bevy::prelude::*;

/// All gameplay plugins, in dependency order.
pub struct PlumberPlugins;

impl Plugin for PlumberPlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            movement::MovementPlugin,
            content::ContentPlugin,
            level::LevelPlugin,
            actor::ActorPlugin,
        ));
    }
}
