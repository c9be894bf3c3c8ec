//! Game configuration
//!
//! Window size and menu styling are read from a JSON file. Every field has a default
//! so partial files (or no file at all) work.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "BRICK_DESTROY_CONFIG";

/// Config file shipped next to the game assets
const ASSET_CONFIG_PATH: &str = "assets/config/brick_destroy.json";

/// Largest accepted menu border stroke, in pixels
pub const MAX_BORDER_SIZE: u32 = 64;

/// Largest accepted dash or gap length, in pixels
pub const MAX_DASH_LENGTH: u32 = 1024;

/// An RGB colour written as `[r, g, b]` in JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl From<RgbColor> for sdl2::pixels::Color {
    fn from(c: RgbColor) -> Self {
        sdl2::pixels::Color::RGB(c.0, c.1, c.2)
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Brick Destroy".to_string(),
            width: 600,
            height: 450,
        }
    }
}

/// Home menu colours and strokes
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub background: RgbColor,
    pub border: RgbColor,
    pub dash_border: RgbColor,
    pub text: RgbColor,
    pub clicked_button: RgbColor,
    pub clicked_text: RgbColor,
    pub border_size: u32,
    /// `[on, off]` dash lengths of the top border stroke
    pub dashes: [u32; 2],
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            background: RgbColor(0, 178, 0),     // Dark green
            border: RgbColor(200, 8, 21),        // Venetian red
            dash_border: RgbColor(255, 216, 0),  // School bus yellow
            text: RgbColor(0, 0, 0),
            clicked_button: RgbColor(0, 254, 0), // Background, brightened
            clicked_text: RgbColor(255, 255, 255),
            border_size: 5,
            dashes: [12, 6],
        }
    }
}

impl MenuConfig {
    /// Rejects stroke values that would make the border unreasonably large to draw
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.border_size > MAX_BORDER_SIZE {
            return Err(ConfigError::Invalid(format!(
                "menu.border_size {} exceeds {}",
                self.border_size, MAX_BORDER_SIZE
            )));
        }
        if let Some(len) = self.dashes.iter().find(|&&len| len > MAX_DASH_LENGTH) {
            return Err(ConfigError::Invalid(format!(
                "menu.dashes length {} exceeds {}",
                len, MAX_DASH_LENGTH
            )));
        }
        Ok(())
    }
}

/// Errors that can occur while loading the config file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Parsed, but a value is out of range
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.menu.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads the first config file found in [`config_search_paths`]
    ///
    /// A missing file means defaults. A file that exists but can't be read or parsed is
    /// logged and skipped.
    pub fn load_or_default() -> Self {
        for path in config_search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Ignoring config {}: {}", path.display(), e),
            }
        }

        log::info!("No config file found, using defaults");
        GameConfig::default()
    }
}

/// Config locations in priority order
///
/// 1. Path in `BRICK_DESTROY_CONFIG`
/// 2. `<user config dir>/brick_destroy/config.json`
/// 3. `assets/config/brick_destroy.json`
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(explicit));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("brick_destroy").join("config.json"));
    }
    paths.push(PathBuf::from(ASSET_CONFIG_PATH));

    paths
}
