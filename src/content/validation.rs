//! Validation of loaded tuning, level and sprite sheet definitions.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for pushing an error when a condition fails
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

pub fn validate_plumber(def: &PlumberDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let motion = &def.motion;

    check!(errors, motion.max_speed > 0.0, "Plumber", "motion", "max_speed",
        "must be positive, got {}", motion.max_speed);
    check!(errors, motion.acceleration >= 0.0, "Plumber", "motion", "acceleration",
        "must not be negative, got {}", motion.acceleration);
    check!(errors, motion.deceleration >= 0.0, "Plumber", "motion", "deceleration",
        "must not be negative, got {}", motion.deceleration);
    for (index, impulse) in motion.jump_curve.impulses().iter().enumerate() {
        check!(errors, *impulse >= 0.0, "Plumber", "motion", "jump_curve",
            "impulse {} is negative ({})", index, impulse);
    }

    check!(errors, def.collision.resolve_step > 0.0, "Plumber", "collision", "resolve_step",
        "must be positive, got {}", def.collision.resolve_step);
    check!(errors, def.collision.max_resolve_steps > 0, "Plumber", "collision",
        "max_resolve_steps", "must be at least 1");

    check!(errors, def.body.size.x > 0.0 && def.body.size.y > 0.0, "Plumber", "body", "size",
        "must be positive, got {}x{}", def.body.size.x, def.body.size.y);
    check!(errors, def.animation.frames_per_step > 0, "Plumber", "animation",
        "frames_per_step", "must be at least 1");

    errors
}

pub fn validate_level(def: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(errors, def.tile_size.x > 0.0 && def.tile_size.y > 0.0, "Level", &def.name,
        "tile_size", "must be positive, got {}x{}", def.tile_size.x, def.tile_size.y);

    let width = def.rows.first().map(|row| row.chars().count()).unwrap_or(0);
    for (index, row) in def.rows.iter().enumerate() {
        check!(errors, row.chars().count() == width, "Level", &def.name, "rows",
            "row {} is {} tiles wide, expected {}", index, row.chars().count(), width);
        if let Some(glyph) = row.chars().find(|c| !matches!(c, '#' | '=' | '.' | ' ')) {
            check!(errors, false, "Level", &def.name, "rows",
                "row {} contains unknown tile '{}'", index, glyph);
        }
    }

    errors
}

pub fn validate_sprite_sheet(def: &SpriteSheetDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (animation, frames) in &def.animations {
        for name in frames {
            check!(errors, def.frames.contains_key(name), "Animation", animation, "frames",
                "references missing frame '{}'", name);
        }
    }
    for (name, frame) in &def.frames {
        check!(errors, frame.frame.w > 0.0 && frame.frame.h > 0.0, "Frame", name, "frame",
            "must have a positive size");
    }

    errors
}
