use bevy::prelude::*;

use tiny_plumber::PlumberPlugins;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tiny Plumber".to_string(),
                        resolution: (800, 480).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(PlumberPlugins)
        .run();
}
