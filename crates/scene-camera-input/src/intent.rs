//! Camera intents and the queue that carries them to the render loop.
//!
//! Input sources on any thread hold an [`IntentSender`]. The thread that owns
//! the [`Camera`] holds the [`IntentQueue`] and calls [`IntentQueue::apply`]
//! once per frame, so the camera itself never needs a lock.

use crossbeam_channel::{Receiver, Sender, unbounded};
use glam::Vec3;
use scene_camera_core::{Camera, CameraMode, Direction};
use tracing::{debug, trace};

use crate::error::InputError;

/// A single request to change the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraIntent {
    /// Move in the active mode.
    Move {
        /// Direction of travel.
        direction: Direction,
        /// Magnitude; sign and units are the sender's choice.
        amount: f32,
    },
    /// Re-aim at a world-space point.
    LookAt(Vec3),
    /// Switch to a specific mode.
    SetMode(CameraMode),
    /// Switch to the next mode in the cycle.
    CycleMode,
    /// Change the inter-pupillary distance.
    SetIpd(f32),
    /// Restore the mode's default placement.
    Reset,
}

impl CameraIntent {
    /// Apply this intent to a camera.
    pub fn apply_to(self, camera: &mut Camera) {
        match self {
            Self::Move { direction, amount } => camera.move_in(direction, amount),
            Self::LookAt(target) => camera.look_at(target),
            Self::SetMode(mode) => camera.set_mode(mode),
            Self::CycleMode => camera.set_mode(camera.mode().next()),
            Self::SetIpd(ipd) => camera.set_ipd(ipd),
            Self::Reset => camera.reset(),
        }
    }
}

/// Cloneable, `Send` handle for submitting intents from any thread.
#[derive(Debug, Clone)]
pub struct IntentSender {
    sender: Sender<CameraIntent>,
}

impl IntentSender {
    /// Queue an intent for the next frame.
    pub fn send(&self, intent: CameraIntent) -> Result<(), InputError> {
        self.sender
            .send(intent)
            .map_err(|_| InputError::Disconnected)
    }

    /// Shorthand for a [`CameraIntent::Move`].
    pub fn send_move(&self, direction: Direction, amount: f32) -> Result<(), InputError> {
        self.send(CameraIntent::Move { direction, amount })
    }
}

/// Receiving end of the intent channel, owned by the render loop.
#[derive(Debug)]
pub struct IntentQueue {
    sender: Sender<CameraIntent>,
    receiver: Receiver<CameraIntent>,
}

impl IntentQueue {
    /// Create an empty, unbounded queue.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// A new handle for submitting intents.
    pub fn sender(&self) -> IntentSender {
        IntentSender {
            sender: self.sender.clone(),
        }
    }

    /// Number of intents waiting.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether no intents are waiting.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Drain every pending intent into `camera` in submission order.
    /// Returns how many were applied.
    pub fn apply(&self, camera: &mut Camera) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.receiver.try_recv() {
            trace!("Applying {intent:?}");
            intent.apply_to(camera);
            applied += 1;
        }
        if applied > 0 {
            debug!("Applied {applied} camera intents");
        }
        applied
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}
