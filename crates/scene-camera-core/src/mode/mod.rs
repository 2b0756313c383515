//! Camera interaction modes and the direction codes fed to [`Camera::move_in`].
//!
//! Each mode lives in its own module with a single `apply` entry point;
//! [`Camera::move_in`] is the only place that chooses between them.
//!
//! [`Camera::move_in`]: crate::Camera::move_in

pub(crate) mod fps;
pub(crate) mod museum;
pub(crate) mod rts;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which movement algorithm [`Camera::move_in`](crate::Camera::move_in) runs.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Orbit around a fixed target.
    #[default]
    Museum = 1,
    /// Free-look: eye and gaze move together.
    Fps = 2,
    /// Ground-locked pan, zoom and orbit.
    Rts = 3,
}

impl CameraMode {
    /// All modes in code order.
    pub const ALL: [CameraMode; 3] = [CameraMode::Museum, CameraMode::Fps, CameraMode::Rts];

    /// Map the integer mode code (1, 2, 3) to a mode.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Museum),
            2 => Some(Self::Fps),
            3 => Some(Self::Rts),
            _ => None,
        }
    }

    /// The integer code of this mode.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The next mode in the cycle Museum -> Fps -> Rts -> Museum.
    pub fn next(self) -> Self {
        match self {
            Self::Museum => Self::Fps,
            Self::Fps => Self::Rts,
            Self::Rts => Self::Museum,
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Museum => "museum",
            Self::Fps => "fps",
            Self::Rts => "rts",
        };
        f.write_str(name)
    }
}

/// Closed set of movement directions. The discriminants are the wire codes
/// the input layer sends; every mode accepts every code, and codes a mode
/// has no use for are no-ops.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    /// Forward, zoom in, or pan forward.
    Forward = 0,
    /// Backward, zoom out, or pan backward.
    Backward = 1,
    /// Left.
    Left = 2,
    /// Right.
    Right = 3,
    /// Up or orbit up.
    Up = 4,
    /// Down or orbit down.
    Down = 5,
    /// Pitch up.
    PitchUp = 6,
    /// Pitch down.
    PitchDown = 7,
    /// Yaw left.
    YawLeft = 8,
    /// Yaw right.
    YawRight = 9,
    /// Roll left.
    RollLeft = 10,
    /// Roll right.
    RollRight = 11,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 12] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::PitchUp,
        Direction::PitchDown,
        Direction::YawLeft,
        Direction::YawRight,
        Direction::RollLeft,
        Direction::RollRight,
    ];

    /// Map a raw direction code. Out-of-range codes return `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The raw code of this direction.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Name used in configuration files, e.g. `"YawLeft"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Backward => "Backward",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::PitchUp => "PitchUp",
            Self::PitchDown => "PitchDown",
            Self::YawLeft => "YawLeft",
            Self::YawRight => "YawRight",
            Self::RollLeft => "RollLeft",
            Self::RollRight => "RollRight",
        }
    }

    /// Inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_codes_roundtrip() {
        for mode in CameraMode::ALL {
            assert_eq!(CameraMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(CameraMode::from_code(0), None);
        assert_eq!(CameraMode::from_code(4), None);
    }

    #[test]
    fn test_mode_cycle_visits_all_modes() {
        let mut mode = CameraMode::Museum;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, CameraMode::Museum);
        assert_eq!(seen, CameraMode::ALL.to_vec());
    }

    #[test]
    fn test_direction_codes_match_positions() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.code(), i as i32);
            assert_eq!(Direction::from_code(i as i32), Some(*direction));
        }
    }

    #[test]
    fn test_out_of_range_direction_codes() {
        assert_eq!(Direction::from_code(-1), None);
        assert_eq!(Direction::from_code(12), None);
        assert_eq!(Direction::from_code(i32::MAX), None);
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::from_name("YawLeft"), Some(Direction::YawLeft));
        assert_eq!(Direction::from_name("yawleft"), None);
        for direction in Direction::ALL {
            assert_eq!(Direction::from_name(direction.name()), Some(direction));
        }
    }
}
