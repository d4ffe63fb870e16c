//! Level domain: tile map construction, tile sprites and the collision overlay.

use bevy::prelude::*;

use crate::content::LevelDef;
use crate::core::world_to_render;
use crate::level::{CollisionDebug, CollisionOverlay, LevelTile, TileMap};

const SOLID_COLOR: Color = Color::srgb(0.55, 0.35, 0.2);
const DECORATION_COLOR: Color = Color::srgb(0.3, 0.5, 0.3);
const OVERLAY_COLOR: Color = Color::srgba(1.0, 0.1, 0.1, 0.45);

pub(crate) fn build_tile_map(level: Res<LevelDef>, mut map: ResMut<TileMap>) {
    *map = TileMap::from_def(&level);
    info!(
        "Built tile map '{}': {} collision tiles, {} decoration tiles",
        level.name,
        map.collision.len(),
        map.decoration.len()
    );
}

pub(crate) fn spawn_tiles(mut commands: Commands, map: Res<TileMap>, debug: Res<CollisionDebug>) {
    let overlay_visibility = debug.visibility();

    for tile in &map.decoration {
        commands.spawn((
            LevelTile,
            Sprite::from_color(DECORATION_COLOR, tile.rect.size()),
            Transform::from_translation(world_to_render(tile.rect.center()).extend(-1.0)),
        ));
    }

    for tile in &map.collision {
        commands
            .spawn((
                LevelTile,
                Sprite::from_color(SOLID_COLOR, tile.rect.size()),
                Transform::from_translation(world_to_render(tile.rect.center()).extend(0.0)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    CollisionOverlay,
                    Sprite::from_color(OVERLAY_COLOR, tile.rect.size()),
                    Transform::from_xyz(0.0, 0.0, 0.5),
                    overlay_visibility,
                ));
            });
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) fn toggle_collision_debug(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut collision_debug: ResMut<CollisionDebug>,
    mut overlays: Query<&mut Visibility, With<CollisionOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    collision_debug.visible = !collision_debug.visible;
    for mut visibility in &mut overlays {
        *visibility = collision_debug.visibility();
    }
    info!("Collision overlay visible: {}", collision_debug.visible);
}
