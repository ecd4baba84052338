//! Viewer configuration.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and loading from disk.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//!
//! [sprite]
//! texture = ./assets/out-horizontal-correct.png
//! frames = 4
//! fps = 9
//! ```

use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_SPRITE_TEXTURE: &str = "./assets/out-horizontal-correct.png";
const DEFAULT_SPRITE_FRAMES: usize = 4;
const DEFAULT_SPRITE_FPS: f32 = 9.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Viewer configuration read once at startup.
///
/// Stores window settings and the sprite sheet layout. `sprite_frames` and
/// `sprite_fps` are only validated when the animator is built from them.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target render frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Path to the sprite sheet image.
    pub sprite_texture: PathBuf,
    /// Number of horizontal tiles in the sprite sheet.
    pub sprite_frames: usize,
    /// Initial animation rate in frames per second.
    pub sprite_fps: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            sprite_texture: PathBuf::from(DEFAULT_SPRITE_TEXTURE),
            sprite_frames: DEFAULT_SPRITE_FRAMES,
            sprite_fps: DEFAULT_SPRITE_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = read_uint(&config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = read_uint(&config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = read_uint(&config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [sprite] section
        if let Some(texture) = config.get("sprite", "texture") {
            self.sprite_texture = PathBuf::from(texture);
        }
        if let Some(frames) = read_uint(&config, "sprite", "frames") {
            self.sprite_frames = frames;
        }
        if let Some(fps) = config.getfloat("sprite", "fps").ok().flatten() {
            self.sprite_fps = fps as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, sprite={:?} ({} frames @ {} fps)",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.sprite_texture,
            self.sprite_frames,
            self.sprite_fps
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Read an unsigned key, keeping the current value when it does not fit `T`.
fn read_uint<T: TryFrom<u64>>(config: &Ini, section: &str, key: &str) -> Option<T> {
    let value = config.getuint(section, key).ok().flatten()?;
    match T::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Config value {}.{} = {} is out of range, ignored", section, key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flamesprite_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.sprite_frames, 4);
        assert_eq!(config.sprite_fps, 9.0);
        assert!(config.vsync);
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.sprite_frames, 4);
    }

    #[test]
    fn test_load_partial_file() {
        let path = temp_path("partial");
        std::fs::write(&path, "[sprite]\nframes = 8\nfps = 12.5\n[window]\nvsync = false\n")
            .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.sprite_frames, 8);
        assert_eq!(config.sprite_fps, 12.5);
        assert!(!config.vsync);
        // untouched keys keep their defaults
        assert_eq!(config.window_width, 1280);
        assert_eq!(
            config.sprite_texture,
            PathBuf::from("./assets/out-horizontal-correct.png")
        );

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_out_of_range_values_keep_defaults() {
        let path = temp_path("range");
        std::fs::write(
            &path,
            "[window]\nwidth = 99999999999\nheight = 600\ntarget_fps = 4294967296\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.target_fps, 120);

        std::fs::remove_file(&path).ok();
    }
}
