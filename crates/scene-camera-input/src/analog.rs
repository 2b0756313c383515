//! Analog stick to camera move mapping.

use scene_camera_core::Direction;

use crate::intent::CameraIntent;

/// Default stick deflection below which input is ignored.
pub const DEFAULT_DEAD_ZONE: f32 = 0.2;

/// Maps a two-axis stick to forward and sideways camera moves.
///
/// `y` drives [`Direction::Forward`] and `x` drives [`Direction::Right`];
/// negative deflection becomes a negative amount, which every mode treats as
/// the opposite direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogAxes {
    /// Multiplier applied after dead-zone filtering.
    pub scale: f32,
    /// Deflection below which an axis reads as zero.
    pub dead_zone: f32,
}

impl Default for AnalogAxes {
    fn default() -> Self {
        Self {
            scale: 0.5,
            dead_zone: DEFAULT_DEAD_ZONE,
        }
    }
}

impl AnalogAxes {
    /// Create a mapping. The dead zone is clamped to `[0, 0.99]`.
    pub fn new(scale: f32, dead_zone: f32) -> Self {
        Self {
            scale,
            dead_zone: dead_zone.clamp(0.0, 0.99),
        }
    }

    /// Move intents for one stick sample. Axes inside the dead zone produce
    /// nothing.
    pub fn intents(&self, x: f32, y: f32) -> Vec<CameraIntent> {
        [(Direction::Forward, y), (Direction::Right, x)]
            .into_iter()
            .filter_map(|(direction, raw)| {
                let value = apply_dead_zone(raw, self.dead_zone);
                (value != 0.0).then_some(CameraIntent::Move {
                    direction,
                    amount: value * self.scale,
                })
            })
            .collect()
    }
}

/// Zero inside the dead zone or for non-finite input; outside it, rescale
/// `[dead_zone, 1]` to `[0, 1]`, preserving sign.
pub(crate) fn apply_dead_zone(raw: f32, dead_zone: f32) -> f32 {
    let abs = raw.abs();
    if !raw.is_finite() || abs < dead_zone {
        return 0.0;
    }
    let rescaled = (abs - dead_zone) / (1.0 - dead_zone);
    rescaled.min(1.0).copysign(raw)
}
