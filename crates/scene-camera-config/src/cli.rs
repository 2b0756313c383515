//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use scene_camera_core::CameraMode;

use crate::{Config, StereoMode};

/// Scene camera demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "scene-camera-demo", about = "Drive a scene camera from key names on stdin")]
pub struct CliArgs {
    /// Camera mode (1: museum, 2: FPS, 3: RTS).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub mode: Option<u8>,

    /// Screen width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Screen height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Presentation mode.
    #[arg(long, value_enum)]
    pub stereo: Option<StereoMode>,

    /// Inter-pupillary distance.
    #[arg(long)]
    pub ipd: Option<f32>,

    /// Vertical field of view in degrees.
    #[arg(long)]
    pub fov: Option<f32>,

    /// Frames per second of the demo loop.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(mode) = args.mode.and_then(CameraMode::from_code) {
            self.camera.mode = mode;
        }
        if let Some(w) = args.width {
            self.display.width = w;
        }
        if let Some(h) = args.height {
            self.display.height = h;
        }
        if let Some(stereo) = args.stereo {
            self.display.stereo = stereo;
        }
        if let Some(ipd) = args.ipd {
            self.camera.ipd = ipd;
        }
        if let Some(fov) = args.fov {
            self.camera.fov_degrees = fov;
        }
        if let Some(fps) = args.fps {
            self.display.target_fps = fps;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
