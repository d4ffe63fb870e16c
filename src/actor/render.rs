//! Actor domain: the sprite transform handed to the renderer each frame.

use bevy::prelude::*;

use crate::core::world_to_render;

/// Position, size, mirroring and texture region of the actor sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Body centre in y-down world units.
    pub position: Vec2,
    pub size: Vec2,
    pub flip_x: bool,
    /// `None` keeps whatever region the sprite already shows.
    pub region: Option<Rect>,
}

/// Accepts the actor's render state.
pub trait SpriteSink {
    fn apply(&mut self, state: &RenderState);
}

/// Writes render state into a bevy sprite and its transform.
pub struct SpriteTarget<'a> {
    pub transform: &'a mut Transform,
    pub sprite: &'a mut Sprite,
}

impl SpriteSink for SpriteTarget<'_> {
    fn apply(&mut self, state: &RenderState) {
        let render = world_to_render(state.position);
        self.transform.translation.x = render.x;
        self.transform.translation.y = render.y;
        self.sprite.custom_size = Some(state.size);
        self.sprite.flip_x = state.flip_x;
        if let Some(region) = state.region {
            self.sprite.rect = Some(region);
        }
    }
}
