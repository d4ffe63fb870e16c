//! Loader for the RON tuning files and the JSON sprite sheet at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Everything read from disk at startup.
#[derive(Debug, Clone, Default)]
pub struct LoadedContent {
    pub plumber: PlumberDef,
    pub level: LevelDef,
    pub sheet: SpriteSheetDef,
}

/// Create RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Load a single RON struct.
pub fn load_ron_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: path.display().to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single JSON document.
pub fn load_json_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load `data/plumber.ron`, `data/level.ron` and the sprite sheet named by
/// the plumber's animation tuning from `assets_dir`.
pub fn load_all_content(assets_dir: &Path) -> Result<LoadedContent, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let plumber = match load_ron_file::<PlumberDef>(&assets_dir.join("data/plumber.ron")) {
        Ok(plumber) => plumber,
        Err(e) => {
            errors.push(e);
            // The sheet path comes from the plumber file
            return Err(errors);
        }
    };

    let level = load_ron_file::<LevelDef>(&assets_dir.join("data/level.ron"))
        .map_err(|e| errors.push(e))
        .ok();

    let sheet_path = assets_dir.join("sprites").join(&plumber.animation.sheet);
    let sheet = load_json_file::<SpriteSheetDef>(&sheet_path)
        .map_err(|e| errors.push(e))
        .ok();

    match (level, sheet) {
        (Some(level), Some(sheet)) if errors.is_empty() => Ok(LoadedContent {
            plumber,
            level,
            sheet,
        }),
        _ => Err(errors),
    }
}
