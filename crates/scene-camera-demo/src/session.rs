//! The frame loop: drain queued intents into the camera at a fixed rate
//! until the console stops.

use std::io::BufRead;
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick};
use scene_camera_config::Config;
use scene_camera_core::{Camera, CameraError};
use scene_camera_input::IntentQueue;
use tracing::{debug, info};

use crate::console::{Console, StopReason};
use crate::frame::FrameMatrices;

/// Why a session could not run to completion.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The input thread could not be started.
    #[error("failed to start console input: {0}")]
    Spawn(#[source] std::io::Error),

    /// The camera's rendering parameters cannot produce a frame.
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// Drive frames at the configured rate while `console` reads `reader` on
/// its own thread. Returns why input stopped.
///
/// Intents sent just before the stop signal are applied by one last frame.
pub fn run_session<R>(
    config: &Config,
    camera: &mut Camera,
    console: Console,
    reader: R,
) -> Result<StopReason, SessionError>
where
    R: BufRead + Send + 'static,
{
    let queue = IntentQueue::new();
    let (stop_tx, stop_rx) = bounded(1);
    let _input = console
        .spawn(reader, queue.sender(), stop_tx)
        .map_err(SessionError::Spawn)?;

    let surface = &config.display;
    let stereo = surface.stereo.is_stereo(surface.width, surface.height);
    info!(
        "Rendering {}x{} {} at {} fps",
        surface.width,
        surface.height,
        if stereo { "side-by-side" } else { "mono" },
        surface.target_fps
    );

    let ticker = tick(Duration::from_secs_f64(1.0 / f64::from(surface.target_fps.max(1))));
    let mut frames: u64 = 0;
    let reason = loop {
        select! {
            recv(stop_rx) -> reason => break reason.unwrap_or(StopReason::Disconnected),
            recv(ticker) -> _ => {
                render_frame(config, camera, &queue, stereo)?;
                frames += 1;
            }
        }
    };

    render_frame(config, camera, &queue, stereo)?;
    debug!("Rendered {} frames", frames + 1);
    Ok(reason)
}

fn render_frame(
    config: &Config,
    camera: &mut Camera,
    queue: &IntentQueue,
    stereo: bool,
) -> Result<(), CameraError> {
    let applied = queue.apply(camera);
    let matrices = FrameMatrices::derive(camera, stereo)?;
    if applied > 0 {
        debug!("Frame matrices: {matrices:?}");
        if config.debug.dump_camera {
            camera.dump();
        }
    }
    Ok(())
}
