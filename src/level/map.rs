//! Level domain: tile layers, collision tiles and the tile map resource.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelDef;

/// Layer memberships a map tile can carry.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum TileLayer {
    #[default]
    Decoration,
    /// Solid for the collision resolver
    Collision,
}

/// Static axis-aligned tile. `rect.min` is the top-left corner (y-down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionTile {
    pub rect: Rect,
    pub layers: LayerMask,
}

impl CollisionTile {
    pub fn new(x: f32, y: f32, width: f32, height: f32, layer: TileLayer) -> Self {
        Self {
            rect: Rect::new(x, y, x + width, y + height),
            layers: layer.into(),
        }
    }

    pub fn solid(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, width, height, TileLayer::Collision)
    }

    pub fn is_collidable(&self) -> bool {
        self.layers.has_all(TileLayer::Collision)
    }
}

/// Tile-map query consumed by the actor each frame.
pub trait TileSource {
    fn collision_tiles(&self) -> &[CollisionTile];
}

impl TileSource for Vec<CollisionTile> {
    fn collision_tiles(&self) -> &[CollisionTile] {
        self
    }
}

/// Static tiles of the current map, split by layer.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileMap {
    pub tile_size: Vec2,
    pub collision: Vec<CollisionTile>,
    pub decoration: Vec<CollisionTile>,
}

impl TileMap {
    /// Builds the map from rows of tile characters, top row first.
    /// `#` is a collision tile, `=` decoration, anything else empty.
    pub fn from_def(def: &LevelDef) -> Self {
        let tile_size: Vec2 = def.tile_size.into();
        let origin: Vec2 = def.origin.into();
        let mut map = Self {
            tile_size,
            ..default()
        };

        for (row, line) in def.rows.iter().enumerate() {
            for (column, glyph) in line.chars().enumerate() {
                let corner = origin + Vec2::new(column as f32, row as f32) * tile_size;
                let layer = match glyph {
                    '#' => TileLayer::Collision,
                    '=' => TileLayer::Decoration,
                    _ => continue,
                };
                let tile = CollisionTile::new(corner.x, corner.y, tile_size.x, tile_size.y, layer);
                match layer {
                    TileLayer::Collision => map.collision.push(tile),
                    TileLayer::Decoration => map.decoration.push(tile),
                }
            }
        }

        map
    }

    pub fn len(&self) -> usize {
        self.collision.len() + self.decoration.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TileSource for TileMap {
    fn collision_tiles(&self) -> &[CollisionTile] {
        &self.collision
    }
}
