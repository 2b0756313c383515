//! Configuration for the scene camera demo.
//!
//! Settings persist to disk as `config.ron`, tolerate missing and unknown
//! fields, and can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CameraConfig, Config, DebugConfig, DisplayConfig, InputConfig, StereoMode,
    default_config_dir,
};
pub use error::ConfigError;
