//! Console driver for the scene camera.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Key names typed on stdin (one or more per line) move the camera;
//! `Escape` or end of input stops the session.
//!
//! ```text
//! echo "W W Q Tab S" | cargo run -p scene-camera-demo -- --mode 2 --stereo side-by-side
//! ```

mod console;
mod frame;
mod session;

use std::io::BufReader;
use std::process::ExitCode;

use clap::Parser;
use scene_camera_config::{CliArgs, Config, default_config_dir};
use scene_camera_input::{AnalogAxes, KeyBindings};
use tracing::{error, info};

use crate::console::Console;
use crate::session::run_session;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to resolve config directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    scene_camera_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let bindings = match KeyBindings::with_overrides(&config.input.keybindings) {
        Ok(bindings) => bindings.scaled(config.input.move_scale),
        Err(e) => {
            error!("Invalid keybinding override: {e}");
            return ExitCode::FAILURE;
        }
    };
    let axes = AnalogAxes::new(config.input.analog_scale, config.input.dead_zone);

    let mut camera = config.build_camera();
    info!("Camera ready: {camera}");

    let console = Console::new(bindings, axes);
    let stdin = BufReader::new(std::io::stdin());
    match run_session(&config, &mut camera, console, stdin) {
        Ok(reason) => {
            info!("Session ended ({reason:?})");
            println!("{camera}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
