//! Input plumbing for the scene camera: key bindings, analog sticks, and a
//! thread-safe intent queue drained once per frame by the camera's owner.

pub mod analog;
pub mod bindings;
mod error;
pub mod intent;

pub use analog::{AnalogAxes, DEFAULT_DEAD_ZONE};
pub use bindings::{KeyAction, KeyBindings};
pub use error::InputError;
pub use intent::{CameraIntent, IntentQueue, IntentSender};
