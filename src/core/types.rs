//! src/core/types.rs
//!
//! Core type definitions for input-binding management
//!
//! This module defines the fundamental types used throughout the application:
//! - `PlayerAction`: Bindable actions, split into gameplay and menu ranges
//! - `Input`: A raw sensed input event from the input layer
//! - `Binding`: The key/button/axis a `PlayerAction` is mapped to
//! - `DeviceConfig`: One device profile with a full binding table
//!
//! All types implement serialization for device-list persistence. The
//! binding string produced by `Binding`'s `Display` impl is the canonical
//! representation compared during conflict detection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::keys;

/// The kind of physical device a configuration belongs to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DeviceKind {
    /// A keyboard profile (bindings are key codes)
    Keyboard,
    /// A gamepad profile (bindings are axes, buttons and hats)
    Gamepad,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Keyboard => write!(f, "keyboard"),
            DeviceKind::Gamepad => write!(f, "gamepad"),
        }
    }
}

/// Direction of travel on an analogue axis.
///
/// Keyboard bindings always carry `Neutral`; a gamepad stick-motion
/// binding is one half of an axis, so direction is part of its identity.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AxisDirection {
    Negative,
    Positive,
    Neutral,
}

/// The kind of raw event delivered by the input layer.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum InputKind {
    /// A key press on a keyboard
    Keyboard,
    /// Movement on a gamepad analogue axis
    StickMotion,
    /// A gamepad button press
    StickButton,
    /// A gamepad hat (d-pad) press
    StickHat,
}

impl InputKind {
    /// The gamepad event kinds, i.e. everything except `Keyboard`.
    pub fn is_gamepad(self) -> bool {
        matches!(
            self,
            InputKind::StickMotion | InputKind::StickButton | InputKind::StickHat
        )
    }
}

/// A raw input event as sensed by the input layer.
///
/// Produced outside this crate; consumed by the capture flow to either
/// match against the awaited device kind or to be written as a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Input {
    /// What kind of event this is
    pub kind: InputKind,
    /// Which physical device produced it
    pub device_id: u32,
    /// Key code, button index or axis index depending on `kind`
    pub button_id: u32,
    /// Axis direction for `StickMotion`; `Neutral` otherwise
    pub axis_direction: AxisDirection,
    /// Resolved character for `Keyboard` events, when printable
    pub character: Option<char>,
}

/// A bindable player action.
///
/// The enum is laid out in two contiguous ranges: gameplay actions first,
/// menu actions second. Conflict detection compares bindings within one
/// range only; sharing an input across the two ranges is deliberate and
/// fine (the game and the menus are never active at the same time).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum PlayerAction {
    SteerLeft,
    SteerRight,
    Accelerate,
    Brake,
    Fire,
    Nitro,
    Drift,
    LookBack,
    Rescue,
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    MenuSelect,
    MenuCancel,
}

impl PlayerAction {
    /// Total number of bindable actions.
    pub const COUNT: usize = 15;

    /// Every action, in binding-table order.
    pub const ALL: [PlayerAction; Self::COUNT] = [
        PlayerAction::SteerLeft,
        PlayerAction::SteerRight,
        PlayerAction::Accelerate,
        PlayerAction::Brake,
        PlayerAction::Fire,
        PlayerAction::Nitro,
        PlayerAction::Drift,
        PlayerAction::LookBack,
        PlayerAction::Rescue,
        PlayerAction::MenuUp,
        PlayerAction::MenuDown,
        PlayerAction::MenuLeft,
        PlayerAction::MenuRight,
        PlayerAction::MenuSelect,
        PlayerAction::MenuCancel,
    ];

    /// Position of this action in the binding table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable internal identifier, used as a widget row name.
    pub fn id(self) -> &'static str {
        match self {
            PlayerAction::SteerLeft => "steerLeft",
            PlayerAction::SteerRight => "steerRight",
            PlayerAction::Accelerate => "accel",
            PlayerAction::Brake => "brake",
            PlayerAction::Fire => "fire",
            PlayerAction::Nitro => "nitro",
            PlayerAction::Drift => "drift",
            PlayerAction::LookBack => "lookBack",
            PlayerAction::Rescue => "rescue",
            PlayerAction::MenuUp => "menuUp",
            PlayerAction::MenuDown => "menuDown",
            PlayerAction::MenuLeft => "menuLeft",
            PlayerAction::MenuRight => "menuRight",
            PlayerAction::MenuSelect => "menuSelect",
            PlayerAction::MenuCancel => "menuCancel",
        }
    }

    /// Human-readable name shown in the action list.
    pub fn label(self) -> &'static str {
        match self {
            PlayerAction::SteerLeft => "Steer Left",
            PlayerAction::SteerRight => "Steer Right",
            PlayerAction::Accelerate => "Accelerate",
            PlayerAction::Brake => "Brake",
            PlayerAction::Fire => "Fire",
            PlayerAction::Nitro => "Nitro",
            PlayerAction::Drift => "Sharp Turn",
            PlayerAction::LookBack => "Look Back",
            PlayerAction::Rescue => "Rescue",
            PlayerAction::MenuUp => "Up",
            PlayerAction::MenuDown => "Down",
            PlayerAction::MenuLeft => "Left",
            PlayerAction::MenuRight => "Right",
            PlayerAction::MenuSelect => "Select",
            PlayerAction::MenuCancel => "Cancel/Back",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the two independent comparison ranges for conflict detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionRange {
    /// In-race actions (steering, accelerating, firing, ...)
    Game,
    /// Menu-navigation actions
    Menu,
}

impl ActionRange {
    /// The actions belonging to this range, in binding-table order.
    pub fn actions(self) -> &'static [PlayerAction] {
        match self {
            ActionRange::Game => &PlayerAction::ALL[..9],
            ActionRange::Menu => &PlayerAction::ALL[9..],
        }
    }
}

/// The kind of gamepad input a binding refers to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum StickInput {
    Motion,
    Button,
    Hat,
}

impl InputKind {
    /// Converts a sensed gamepad event kind into a binding kind.
    ///
    /// Returns `None` for keyboard events, which never produce a
    /// gamepad binding.
    pub fn stick_input(self) -> Option<StickInput> {
        match self {
            InputKind::StickMotion => Some(StickInput::Motion),
            InputKind::StickButton => Some(StickInput::Button),
            InputKind::StickHat => Some(StickInput::Hat),
            InputKind::Keyboard => None,
        }
    }
}

/// The input a `PlayerAction` is mapped to.
///
/// A tagged variant rather than a class hierarchy: the capture flow and
/// the labelling code match on it exhaustively, so a config can never
/// hold a binding of the wrong shape for its device kind unnoticed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Binding {
    /// A keyboard key, with the layout-resolved character when printable
    Keyboard { key: u32, character: Option<char> },
    /// A gamepad axis half, button or hat
    Gamepad {
        kind: StickInput,
        id: u32,
        direction: AxisDirection,
    },
}

impl fmt::Display for Binding {
    /// Produces the canonical binding string.
    ///
    /// Two actions conflict iff their binding strings are equal, so this
    /// must be injective over distinct inputs of one device kind.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Keyboard { key, character } => {
                write!(f, "{}", keys::key_name(*key, *character))
            }
            Binding::Gamepad {
                kind: StickInput::Motion,
                id,
                direction,
            } => match direction {
                AxisDirection::Negative => write!(f, "Axis {} -", id),
                AxisDirection::Positive => write!(f, "Axis {} +", id),
                AxisDirection::Neutral => write!(f, "Axis {}", id),
            },
            Binding::Gamepad {
                kind: StickInput::Button,
                id,
                ..
            } => write!(f, "Button {}", id),
            Binding::Gamepad {
                kind: StickInput::Hat,
                id,
                ..
            } => write!(f, "Hat {}", id),
        }
    }
}

/// One device profile: kind, name, enabled flag and a full binding table.
///
/// The table always holds exactly one binding per `PlayerAction`; the
/// constructors fill it with the game's defaults and `set_*_binding`
/// can only replace entries, never remove them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DeviceConfig {
    /// Which kind of device this profile drives
    pub kind: DeviceKind,
    /// Human-readable profile name shown as the screen title
    pub name: String,
    /// Disabled gamepad profiles are kept but ignored by the input layer
    pub enabled: bool,
    /// One binding per `PlayerAction`, indexed by `PlayerAction::index`
    bindings: Vec<Binding>,
}

impl DeviceConfig {
    /// Creates a keyboard profile with the default key bindings.
    pub fn new_keyboard(name: &str) -> Self {
        let key = |key: u32, character: Option<char>| Binding::Keyboard { key, character };
        Self {
            kind: DeviceKind::Keyboard,
            name: name.to_string(),
            enabled: true,
            bindings: vec![
                key(keys::KEY_LEFT, None),   // SteerLeft
                key(keys::KEY_RIGHT, None),  // SteerRight
                key(keys::KEY_UP, None),     // Accelerate
                key(keys::KEY_DOWN, None),   // Brake
                key(keys::KEY_SPACE, None),  // Fire
                key(0x4E, Some('n')),        // Nitro
                key(0x56, Some('v')),        // Drift
                key(0x42, Some('b')),        // LookBack
                key(keys::KEY_BACK, None),   // Rescue
                key(keys::KEY_UP, None),     // MenuUp
                key(keys::KEY_DOWN, None),   // MenuDown
                key(keys::KEY_LEFT, None),   // MenuLeft
                key(keys::KEY_RIGHT, None),  // MenuRight
                key(keys::KEY_RETURN, None), // MenuSelect
                key(keys::KEY_BACK, None),   // MenuCancel
            ],
        }
    }

    /// Creates a gamepad profile with the default axis/button bindings.
    pub fn new_gamepad(name: &str) -> Self {
        let axis = |id: u32, direction: AxisDirection| Binding::Gamepad {
            kind: StickInput::Motion,
            id,
            direction,
        };
        let button = |id: u32| Binding::Gamepad {
            kind: StickInput::Button,
            id,
            direction: AxisDirection::Neutral,
        };
        Self {
            kind: DeviceKind::Gamepad,
            name: name.to_string(),
            enabled: true,
            bindings: vec![
                axis(0, AxisDirection::Negative), // SteerLeft
                axis(0, AxisDirection::Positive), // SteerRight
                axis(1, AxisDirection::Negative), // Accelerate
                axis(1, AxisDirection::Positive), // Brake
                button(0),                        // Fire
                button(1),                        // Nitro
                button(2),                        // Drift
                button(3),                        // LookBack
                button(4),                        // Rescue
                axis(1, AxisDirection::Negative), // MenuUp
                axis(1, AxisDirection::Positive), // MenuDown
                axis(0, AxisDirection::Negative), // MenuLeft
                axis(0, AxisDirection::Positive), // MenuRight
                button(0),                        // MenuSelect
                button(3),                        // MenuCancel
            ],
        }
    }

    /// Returns the binding of one action.
    pub fn binding(&self, action: PlayerAction) -> &Binding {
        &self.bindings[action.index()]
    }

    /// Rebinds an action to a keyboard key.
    pub fn set_keyboard_binding(&mut self, action: PlayerAction, key: u32, character: Option<char>) {
        self.bindings[action.index()] = Binding::Keyboard { key, character };
    }

    /// Rebinds an action to a gamepad axis half, button or hat.
    pub fn set_gamepad_binding(
        &mut self,
        action: PlayerAction,
        kind: StickInput,
        id: u32,
        direction: AxisDirection,
    ) {
        self.bindings[action.index()] = Binding::Gamepad {
            kind,
            id,
            direction,
        };
    }

    /// Canonical binding string of one action (conflict comparison key).
    pub fn binding_string(&self, action: PlayerAction) -> String {
        self.binding(action).to_string()
    }

    /// True when the binding table covers every action.
    ///
    /// Freshly constructed configs always do; deserialized ones are
    /// checked against this before being accepted into a device list.
    pub fn is_complete(&self) -> bool {
        self.bindings.len() == PlayerAction::COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ranges_partition_all_actions() {
        let game = ActionRange::Game.actions();
        let menu = ActionRange::Menu.actions();

        assert_eq!(game.len() + menu.len(), PlayerAction::COUNT);
        assert_eq!(game[0], PlayerAction::SteerLeft);
        assert_eq!(game[game.len() - 1], PlayerAction::Rescue);
        assert_eq!(menu[0], PlayerAction::MenuUp);
        assert_eq!(menu[menu.len() - 1], PlayerAction::MenuCancel);
    }

    #[test]
    fn test_action_index_matches_all_order() {
        for (i, action) in PlayerAction::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_action_ids_are_unique() {
        let mut ids: Vec<&str> = PlayerAction::ALL.iter().map(|a| a.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PlayerAction::COUNT);
    }

    #[test]
    fn test_new_keyboard_is_complete() {
        let config = DeviceConfig::new_keyboard("kb");
        assert_eq!(config.kind, DeviceKind::Keyboard);
        assert!(config.is_complete());
        assert!(config.enabled);
    }

    #[test]
    fn test_new_gamepad_is_complete() {
        let config = DeviceConfig::new_gamepad("pad");
        assert_eq!(config.kind, DeviceKind::Gamepad);
        assert!(config.is_complete());
    }

    #[test]
    fn test_binding_display_keyboard() {
        let b = Binding::Keyboard {
            key: keys::KEY_SPACE,
            character: None,
        };
        assert_eq!(b.to_string(), "SPACE");

        let b = Binding::Keyboard {
            key: 0x41,
            character: Some('a'),
        };
        assert_eq!(b.to_string(), "A");
    }

    #[test]
    fn test_binding_display_gamepad() {
        let motion = Binding::Gamepad {
            kind: StickInput::Motion,
            id: 2,
            direction: AxisDirection::Positive,
        };
        assert_eq!(motion.to_string(), "Axis 2 +");

        let button = Binding::Gamepad {
            kind: StickInput::Button,
            id: 5,
            direction: AxisDirection::Neutral,
        };
        assert_eq!(button.to_string(), "Button 5");

        let hat = Binding::Gamepad {
            kind: StickInput::Hat,
            id: 0,
            direction: AxisDirection::Neutral,
        };
        assert_eq!(hat.to_string(), "Hat 0");
    }

    #[test]
    fn test_axis_halves_are_distinct_binding_strings() {
        let neg = Binding::Gamepad {
            kind: StickInput::Motion,
            id: 0,
            direction: AxisDirection::Negative,
        };
        let pos = Binding::Gamepad {
            kind: StickInput::Motion,
            id: 0,
            direction: AxisDirection::Positive,
        };
        assert_ne!(neg.to_string(), pos.to_string());
    }

    #[test]
    fn test_set_binding_changes_only_target_action() {
        let mut config = DeviceConfig::new_keyboard("kb");
        let before: Vec<String> = PlayerAction::ALL
            .iter()
            .map(|a| config.binding_string(*a))
            .collect();

        config.set_keyboard_binding(PlayerAction::Brake, keys::KEY_SPACE, Some(' '));

        for action in PlayerAction::ALL {
            if action == PlayerAction::Brake {
                assert_eq!(config.binding_string(action), "SPACE");
            } else {
                assert_eq!(config.binding_string(action), before[action.index()]);
            }
        }
    }

    #[test]
    fn test_stick_input_conversion() {
        assert_eq!(
            InputKind::StickMotion.stick_input(),
            Some(StickInput::Motion)
        );
        assert_eq!(
            InputKind::StickButton.stick_input(),
            Some(StickInput::Button)
        );
        assert_eq!(InputKind::StickHat.stick_input(), Some(StickInput::Hat));
        assert_eq!(InputKind::Keyboard.stick_input(), None);
    }
}
