//! Type serialization tests
//!
//! The device list is persisted as JSON; these tests pin down that a
//! config survives a round trip with its binding table intact.

use crate::core::types::{AxisDirection, DeviceConfig, DeviceKind, PlayerAction, StickInput};
use crate::core::keys;

#[test]
fn keyboard_config_round_trips_through_json() {
    let mut config = DeviceConfig::new_keyboard("Laptop Keyboard");
    config.set_keyboard_binding(PlayerAction::Fire, keys::KEY_SPACE, Some(' '));

    let json = serde_json::to_string(&config).unwrap();
    let restored: DeviceConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, config);
    assert_eq!(restored.kind, DeviceKind::Keyboard);
    assert!(restored.is_complete());
    assert_eq!(restored.binding_string(PlayerAction::Fire), "SPACE");
}

#[test]
fn gamepad_config_round_trips_through_json() {
    let mut config = DeviceConfig::new_gamepad("XBox Controller");
    config.enabled = false;
    config.set_gamepad_binding(
        PlayerAction::Nitro,
        StickInput::Motion,
        3,
        AxisDirection::Positive,
    );

    let json = serde_json::to_string(&config).unwrap();
    let restored: DeviceConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, config);
    assert!(!restored.enabled);
    assert_eq!(restored.binding_string(PlayerAction::Nitro), "Axis 3 +");
}

#[test]
fn truncated_binding_table_is_detected() {
    // A file edited by hand may drop entries; is_complete must notice.
    let mut json = serde_json::to_value(DeviceConfig::new_keyboard("kb")).unwrap();
    let bindings = json["bindings"].as_array_mut().unwrap();
    bindings.pop();

    let restored: DeviceConfig = serde_json::from_value(json).unwrap();
    assert!(!restored.is_complete());
}
