//! Core domain: camera setup and the pause toggle.

use bevy::prelude::*;

use crate::core::resources::GameplayPaused;

/// Pause source owned by the Escape toggle.
pub(crate) const MENU_PAUSE: &str = "menu";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        // Centre the view on the default 800x480 map (y-down world, y-up render).
        Transform::from_xyz(400.0, -240.0, 0.0),
    ));
}

pub(crate) fn toggle_pause(keyboard: Res<ButtonInput<KeyCode>>, mut paused: ResMut<GameplayPaused>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let now_paused = paused.toggle(MENU_PAUSE);
        info!("Gameplay paused: {}", now_paused);
    }
}
