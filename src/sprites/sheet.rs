//! Sprite sheet lookups: animation clips resolved from named frames.

use bevy::prelude::*;

use super::AnimationClips;
use crate::content::SpriteSheetDef;
use crate::movement::MotionState;

impl SpriteSheetDef {
    /// Texture region of a named frame.
    pub fn frame(&self, name: &str) -> Option<Rect> {
        self.frames.get(name).map(|def| def.frame.into())
    }

    /// Builds one clip per motion state from the sheet's animations.
    /// Unknown frame names are skipped; states without an animation get no clip.
    pub fn clips(&self) -> AnimationClips {
        let mut clips = AnimationClips::default();
        for state in MotionState::ALL {
            let Some(names) = self.animations.get(state.clip_name()) else {
                continue;
            };
            let frames = names.iter().filter_map(|name| self.frame(name)).collect();
            clips.insert(state, frames);
        }
        clips
    }

    /// Image path relative to `assets/`, if the sheet names one.
    pub fn image_path(&self) -> Option<String> {
        let image = self.meta.image.as_deref()?;
        Some(format!("sprites/{}", image))
    }
}
