//! Core domain: frame ordering, coordinate conventions and pausing.

mod resources;
mod systems;


pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, toggle_pause};

/// Stages of one controller frame, run in this order every `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard folded into the input snapshot
    Input,
    /// Key edges forwarded to input handlers
    Dispatch,
    /// Controller tick
    Tick,
    /// Controller state pushed to sprites
    Sync,
}

/// Converts a y-down world position to bevy's y-up render space.
pub fn world_to_render(position: Vec2) -> Vec2 {
    Vec2::new(position.x, -position.y)
}

/// Orders the frame stages and gates all of them on `gameplay_active`.
///
/// Input sampling pauses with the rest so every key edge is dispatched in
/// the frame it was sampled; changes made while paused surface on resume.
pub fn configure_frame_sets(app: &mut App) -> &mut App {
    app.init_resource::<GameplayPaused>()
        .configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Dispatch,
                FrameSet::Tick,
                FrameSet::Sync,
            )
                .chain(),
        )
        .configure_sets(Update, FrameSet::Input.run_if(gameplay_active))
        .configure_sets(Update, FrameSet::Dispatch.run_if(gameplay_active))
        .configure_sets(Update, FrameSet::Tick.run_if(gameplay_active))
        .configure_sets(Update, FrameSet::Sync.run_if(gameplay_active))
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        configure_frame_sets(app)
            .add_systems(Startup, setup_camera)
            .add_systems(Update, toggle_pause.before(FrameSet::Input));
    }
}
