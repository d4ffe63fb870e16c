//! Content domain: tuning, level and sprite sheet definitions loaded at startup.

mod data;
mod loader;
mod validation;


pub use data::*;
pub use loader::{ContentLoadError, LoadedContent, load_all_content, load_json_file, load_ron_file};
pub use validation::{ValidationError, validate_level, validate_plumber, validate_sprite_sheet};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::KeyBindings;

/// Directory the game reads its data files from.
pub const ASSETS_DIR: &str = "assets";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlumberDef>()
            .init_resource::<LevelDef>()
            .init_resource::<SpriteSheetDef>()
            .add_systems(PreStartup, load_content);
    }
}

/// Loads and validates all content, keeping the built-in defaults for
/// anything that fails.
fn load_content(
    mut plumber: ResMut<PlumberDef>,
    mut level: ResMut<LevelDef>,
    mut sheet: ResMut<SpriteSheetDef>,
    mut bindings: ResMut<KeyBindings>,
) {
    match load_all_content(Path::new(ASSETS_DIR)) {
        Ok(content) => {
            let mut errors = validate_plumber(&content.plumber);
            errors.extend(validate_level(&content.level));
            errors.extend(validate_sprite_sheet(&content.sheet));

            if errors.is_empty() {
                *plumber = content.plumber;
                *level = content.level;
                *sheet = content.sheet;
                info!(
                    "Content loaded: level '{}' ({} rows), {} sheet frames, jump apex {:.0} units",
                    level.name,
                    level.rows.len(),
                    sheet.frames.len(),
                    plumber.motion.jump_curve.apex_height(plumber.motion.gravity)
                );
            } else {
                for error in &errors {
                    error!("Content validation: {}", error);
                }
                warn!("Content failed validation, using built-in defaults");
            }
        }
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            warn!("Content not loaded, using built-in defaults");
        }
    }

    *bindings = plumber.bindings.clone();
}
