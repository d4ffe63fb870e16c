//! Data definitions deserialized from `assets/data/*.ron` and the sprite sheet JSON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::level::CollisionTuning;
use crate::movement::{KeyBindings, MotionTuning};
use crate::sprites::AnimationTuning;

/// Serializable Vec2.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl Vec2Def {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<RectDef> for Rect {
    fn from(r: RectDef) -> Self {
        Rect::new(r.x, r.y, r.x + r.w, r.y + r.h)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BodyDef {
    /// Centre of the body at spawn, y-down world units.
    pub spawn: Vec2Def,
    pub size: Vec2Def,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            spawn: Vec2Def::new(96.0, 352.0),
            size: Vec2Def::new(32.0, 32.0),
        }
    }
}

/// Everything needed to spawn and drive the plumber (`plumber.ron`).
#[derive(Resource, Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlumberDef {
    pub body: BodyDef,
    pub motion: MotionTuning,
    pub collision: CollisionTuning,
    pub animation: AnimationTuning,
    pub bindings: KeyBindings,
}

/// Tile grid of one map (`level.ron`). Rows are listed top to bottom.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelDef {
    pub name: String,
    pub tile_size: Vec2Def,
    /// World position of the top-left corner of the first row.
    pub origin: Vec2Def,
    pub rows: Vec<String>,
}

impl Default for LevelDef {
    fn default() -> Self {
        let rows = [
            "#########################",
            "#.......................#",
            "#.......................#",
            "#.......................#",
            "#.......................#",
            "#................####...#",
            "#.......................#",
            "#..........####.........#",
            "#.......................#",
            "#....####...............#",
            "#.......................#",
            "#...............=.=.....#",
            "#.............#######...#",
            "#.......................#",
            "#########################",
        ];
        Self {
            name: "meadow".to_string(),
            tile_size: Vec2Def::new(32.0, 32.0),
            origin: Vec2Def::default(),
            rows: rows.iter().map(|row| row.to_string()).collect(),
        }
    }
}

/// One named frame of the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct FrameDef {
    pub frame: RectDef,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SheetMeta {
    #[serde(default)]
    pub image: Option<String>,
}

/// Sprite sheet in the common texture-packer JSON layout.
#[derive(Resource, Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SpriteSheetDef {
    pub frames: HashMap<String, FrameDef>,
    #[serde(default)]
    pub animations: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub meta: SheetMeta,
}
