//! Key name to camera action bindings.
//!
//! Keys are identified by name (`"W"`, `"Space"`, `"Tab"`, ...) so that the
//! bindings are independent of any windowing library. Overrides from the
//! config file map an action name to a new key.

use std::collections::HashMap;

use scene_camera_core::Direction;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InputError;
use crate::intent::CameraIntent;

/// Move amount for bindings created by an override that has no default.
const OVERRIDE_AMOUNT: f32 = 0.1;

/// What pressing a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KeyAction {
    /// Move the camera.
    Move {
        /// Direction of travel.
        direction: Direction,
        /// Amount per key press.
        amount: f32,
    },
    /// Switch to the next camera mode.
    CycleMode,
    /// Restore the camera's default placement.
    Reset,
    /// Stop the session.
    Quit,
}

impl KeyAction {
    /// The camera intent for this action, if it has one.
    pub fn intent(self) -> Option<CameraIntent> {
        match self {
            Self::Move { direction, amount } => Some(CameraIntent::Move { direction, amount }),
            Self::CycleMode => Some(CameraIntent::CycleMode),
            Self::Reset => Some(CameraIntent::Reset),
            Self::Quit => None,
        }
    }

    /// Name used to refer to this action in config overrides.
    pub fn name(self) -> &'static str {
        match self {
            Self::Move { direction, .. } => direction.name(),
            Self::CycleMode => "CycleMode",
            Self::Reset => "Reset",
            Self::Quit => "Quit",
        }
    }
}

/// Map from key name to action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    keys: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let moves = [
            ("W", Direction::Forward, 0.2),
            ("S", Direction::Backward, 0.2),
            ("A", Direction::Left, 0.1),
            ("D", Direction::Right, 0.1),
            ("X", Direction::Up, 0.1),
            ("Space", Direction::Down, 0.1),
            ("ArrowUp", Direction::PitchUp, 0.1),
            ("ArrowDown", Direction::PitchDown, 0.1),
            ("Q", Direction::YawLeft, 0.1),
            ("E", Direction::YawRight, 0.1),
            ("Z", Direction::RollLeft, 0.1),
            ("C", Direction::RollRight, 0.1),
        ];
        let mut keys: HashMap<String, KeyAction> = moves
            .into_iter()
            .map(|(key, direction, amount)| (key.to_string(), KeyAction::Move { direction, amount }))
            .collect();
        keys.insert("Tab".to_string(), KeyAction::CycleMode);
        keys.insert("R".to_string(), KeyAction::Reset);
        keys.insert("Escape".to_string(), KeyAction::Quit);
        Self { keys }
    }
}

impl KeyBindings {
    /// Bindings with no keys bound.
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Default bindings with config overrides applied.
    ///
    /// `overrides` maps an action name (a direction name such as `"YawLeft"`,
    /// or `"CycleMode"`, `"Reset"`, `"Quit"`) to the key that should trigger
    /// it. The action's previous key is unbound. Moves keep their default
    /// amount.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self, InputError> {
        let mut bindings = Self::default();
        for (action_name, key) in overrides {
            let action = bindings
                .find_action(action_name)
                .or_else(|| parse_action(action_name))
                .ok_or_else(|| InputError::UnknownAction(action_name.clone()))?;
            bindings.keys.retain(|_, bound| bound.name() != action.name());
            debug!("Binding {key} to {}", action.name());
            bindings.bind(key, action);
        }
        Ok(bindings)
    }

    /// Bind `key` to `action`, replacing whatever it did before.
    pub fn bind(&mut self, key: &str, action: KeyAction) {
        self.keys.insert(key.to_string(), action);
    }

    /// The action bound to `key`, if any.
    pub fn resolve(&self, key: &str) -> Option<KeyAction> {
        self.keys.get(key).copied()
    }

    /// Multiply every move amount by `scale`.
    pub fn scaled(mut self, scale: f32) -> Self {
        for action in self.keys.values_mut() {
            if let KeyAction::Move { amount, .. } = action {
                *amount *= scale;
            }
        }
        self
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn find_action(&self, name: &str) -> Option<KeyAction> {
        self.keys.values().copied().find(|action| action.name() == name)
    }
}

fn parse_action(name: &str) -> Option<KeyAction> {
    match name {
        "CycleMode" => Some(KeyAction::CycleMode),
        "Reset" => Some(KeyAction::Reset),
        "Quit" => Some(KeyAction::Quit),
        _ => Direction::from_name(name).map(|direction| KeyAction::Move {
            direction,
            amount: OVERRIDE_AMOUNT,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.resolve("W"),
            Some(KeyAction::Move {
                direction: Direction::Forward,
                amount: 0.2
            })
        );
        assert_eq!(
            bindings.resolve("Q"),
            Some(KeyAction::Move {
                direction: Direction::YawLeft,
                amount: 0.1
            })
        );
        assert_eq!(bindings.resolve("Tab"), Some(KeyAction::CycleMode));
        assert_eq!(bindings.resolve("Escape"), Some(KeyAction::Quit));
        assert_eq!(bindings.resolve("F13"), None);
    }

    #[test]
    fn test_every_direction_has_a_default_key() {
        let bindings = KeyBindings::default();
        for direction in Direction::ALL {
            assert!(
                bindings.find_action(direction.name()).is_some(),
                "{direction:?} unbound"
            );
        }
    }

    #[test]
    fn test_override_moves_binding_and_keeps_amount() {
        let overrides = HashMap::from([("Forward".to_string(), "ArrowRight".to_string())]);
        let bindings = KeyBindings::with_overrides(&overrides).unwrap();
        assert_eq!(bindings.resolve("W"), None);
        assert_eq!(
            bindings.resolve("ArrowRight"),
            Some(KeyAction::Move {
                direction: Direction::Forward,
                amount: 0.2
            })
        );
    }

    #[test]
    fn test_override_non_move_action() {
        let overrides = HashMap::from([("Quit".to_string(), "Q".to_string())]);
        let bindings = KeyBindings::with_overrides(&overrides).unwrap();
        assert_eq!(bindings.resolve("Q"), Some(KeyAction::Quit));
        assert_eq!(bindings.resolve("Escape"), None);
    }

    #[test]
    fn test_unknown_override_rejected() {
        let overrides = HashMap::from([("Teleport".to_string(), "T".to_string())]);
        assert_eq!(
            KeyBindings::with_overrides(&overrides),
            Err(InputError::UnknownAction("Teleport".to_string()))
        );
    }

    #[test]
    fn test_scaled_only_touches_moves() {
        let bindings = KeyBindings::default().scaled(10.0);
        match bindings.resolve("S") {
            Some(KeyAction::Move { direction, amount }) => {
                assert_eq!(direction, Direction::Backward);
                assert!((amount - 2.0).abs() < 1e-6);
            }
            other => panic!("unexpected binding {other:?}"),
        }
        assert_eq!(bindings.resolve("Tab"), Some(KeyAction::CycleMode));
    }

    #[test]
    fn test_quit_has_no_intent() {
        assert_eq!(KeyAction::Quit.intent(), None);
        assert_eq!(KeyAction::Reset.intent(), Some(CameraIntent::Reset));
    }

    #[test]
    fn test_bindings_ron_roundtrip() {
        let bindings = KeyBindings::default();
        let text = ron::to_string(&bindings).unwrap();
        let parsed: KeyBindings = ron::from_str(&text).unwrap();
        assert_eq!(parsed, bindings);
    }
}
