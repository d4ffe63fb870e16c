//! Level domain: static tile map and collision resolution.

mod collision;
mod map;
mod systems;


pub use collision::{CollisionResolver, CollisionTuning, Resolution};
pub use map::{CollisionTile, TileLayer, TileMap, TileSource};

use bevy::prelude::*;

use crate::level::systems::{build_tile_map, spawn_tiles};

/// Marker for rendered map tiles
#[derive(Component, Debug)]
pub struct LevelTile;

/// Marker for the debug overlay drawn over collision tiles
#[derive(Component, Debug)]
pub struct CollisionOverlay;

/// Debug visibility of the collision layer.
#[derive(Resource, Debug, Default)]
pub struct CollisionDebug {
    pub visible: bool,
}

impl CollisionDebug {
    pub fn visibility(&self) -> Visibility {
        if self.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileMap>()
            .init_resource::<CollisionDebug>()
            .add_systems(Startup, (build_tile_map, spawn_tiles).chain());

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, systems::toggle_collision_debug);
    }
}
