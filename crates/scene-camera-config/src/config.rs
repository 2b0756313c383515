//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Vec3;
use scene_camera_core::{Camera, CameraMode, is_side_by_side};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Nesting depth written across lines: the top level and each section.
const SAVE_DEPTH_LIMIT: usize = 2;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial camera placement and rendering parameters.
    pub camera: CameraConfig,
    /// Output surface settings.
    pub display: DisplayConfig,
    /// Input scaling and key binding overrides.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Camera settings applied at session start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement mode.
    pub mode: CameraMode,
    /// Eye position. `None` keeps the mode's default.
    pub position: Option<[f32; 3]>,
    /// Up vector. `None` keeps the mode's default.
    pub up: Option<[f32; 3]>,
    /// Look-at point. `None` keeps the mode's default.
    pub look_at: Option<[f32; 3]>,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Inter-pupillary distance for stereo rendering.
    pub ipd: f32,
    /// Focal length.
    pub focal_length: f32,
    /// Lens aperture.
    pub aperture: f32,
    /// Ground plane normal for RTS mode.
    pub ground_normal: [f32; 3],
}

/// How frames are presented.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum StereoMode {
    /// Single view.
    Mono,
    /// Left and right eye in the two halves of the screen.
    SideBySide,
    /// Side-by-side when the screen is at least twice as wide as tall.
    #[default]
    Auto,
}

impl StereoMode {
    /// Whether a screen of the given size should be rendered side-by-side.
    pub fn is_stereo(self, width: u32, height: u32) -> bool {
        match self {
            Self::Mono => false,
            Self::SideBySide => true,
            Self::Auto => is_side_by_side(width, height),
        }
    }
}

/// Output surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Mono or stereo presentation.
    pub stereo: StereoMode,
    /// Frame rate of the demo loop.
    pub target_fps: u32,
}

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Multiplier applied to every keyboard move amount.
    pub move_scale: f32,
    /// Multiplier applied to analog stick deflection.
    pub analog_scale: f32,
    /// Stick deflection below which analog input is ignored.
    pub dead_zone: f32,
    /// Keybinding overrides (action name -> key name).
    pub keybindings: HashMap<String, String>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log the full camera state after every frame that changed it.
    pub dump_camera: bool,
}

// --- Default implementations ---

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Museum,
            position: None,
            up: None,
            look_at: None,
            fov_degrees: 45.0,
            near: 1.0,
            far: 100.0,
            ipd: 1.0,
            focal_length: 10.0,
            aperture: 0.0,
            ground_normal: [0.0, 0.0, 1.0],
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            stereo: StereoMode::Auto,
            target_fps: 60,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_scale: 1.0,
            analog_scale: 0.5,
            dead_zone: 0.2,
            keybindings: HashMap::new(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dump_camera: false,
        }
    }
}

// --- Camera construction ---

impl Config {
    /// Build a camera the way a session does before its first frame:
    /// create it in the configured mode, then place, orient and set the
    /// rendering parameters.
    pub fn build_camera(&self) -> Camera {
        let cfg = &self.camera;
        let mut camera = Camera::new(cfg.mode);
        if let Some(position) = cfg.position {
            camera.set_position(Vec3::from(position));
        }
        if let Some(up) = cfg.up {
            camera.set_up(Vec3::from(up));
        }
        camera.set_ground_plane_normal(Vec3::from(cfg.ground_normal));
        camera.set_ipd(cfg.ipd);
        let target = cfg.look_at.map(Vec3::from).unwrap_or(camera.target());
        camera.look_at(target);

        camera.fov = cfg.fov_degrees.to_radians();
        camera.near = cfg.near;
        camera.far = cfg.far;
        camera.focal_length = cfg.focal_length;
        camera.aperture = cfg.aperture;
        camera.set_screen_size(self.display.width as f32, self.display.height as f32);
        camera
    }
}

// --- Load / Save / Reload ---

/// Per-user config directory, e.g. `~/.config/scene-camera` on Linux.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("scene-camera"))
        .ok_or(ConfigError::NoConfigDir)
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    ///
    /// Sections are written one field per line; vectors and the binding
    /// table stay on a single line. The file is written beside the target
    /// and renamed into place, so a reader never sees a partial config.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(SAVE_DEPTH_LIMIT)
            .separate_tuple_members(false)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let staging_path = config_path.with_extension("ron.tmp");
        std::fs::write(&staging_path, serialized).map_err(ConfigError::WriteError)?;
        std::fs::rename(&staging_path, &config_path).map_err(ConfigError::WriteError)?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
