//! src/core/keys.rs
//!
//! Keyboard key-code table
//!
//! Key codes follow the engine's virtual-key numbering (stable across
//! keyboard layouts, which is why they are what gets persisted). The
//! resolved character of a key press is layout-dependent and is only
//! used for display.

/// Backspace
pub const KEY_BACK: u32 = 0x08;
/// Tab
pub const KEY_TAB: u32 = 0x09;
/// Enter / Return
pub const KEY_RETURN: u32 = 0x0D;
/// Unsided shift (some platforms report this instead of a sided code)
pub const KEY_SHIFT: u32 = 0x10;
/// Control
pub const KEY_CONTROL: u32 = 0x11;
/// Escape
pub const KEY_ESCAPE: u32 = 0x1B;
/// Space bar
pub const KEY_SPACE: u32 = 0x20;
/// Left arrow
pub const KEY_LEFT: u32 = 0x25;
/// Up arrow
pub const KEY_UP: u32 = 0x26;
/// Right arrow
pub const KEY_RIGHT: u32 = 0x27;
/// Down arrow
pub const KEY_DOWN: u32 = 0x28;
/// Left shift
pub const KEY_LSHIFT: u32 = 0xA0;
/// Right shift
pub const KEY_RSHIFT: u32 = 0xA1;

/// Returns true for any of the shift key codes.
///
/// Binding an action to shift deserves a warning: shift changes the
/// resolved character of every other key, so letter bindings stop
/// matching while it is held down.
pub fn is_shift(key: u32) -> bool {
    matches!(key, KEY_SHIFT | KEY_LSHIFT | KEY_RSHIFT)
}

/// Returns the display name for a keyboard key.
///
/// Prefers the resolved character when one is available (uppercased so
/// 'a' and 'A' produce the same binding string), then falls back to the
/// names of well-known special keys, then to the raw code.
pub fn key_name(key: u32, character: Option<char>) -> String {
    if let Some(c) = character {
        if !c.is_whitespace() && !c.is_control() {
            return c.to_uppercase().collect();
        }
    }

    match key {
        KEY_BACK => "BACKSPACE".to_string(),
        KEY_TAB => "TAB".to_string(),
        KEY_RETURN => "ENTER".to_string(),
        KEY_SHIFT => "SHIFT".to_string(),
        KEY_CONTROL => "CTRL".to_string(),
        KEY_ESCAPE => "ESCAPE".to_string(),
        KEY_SPACE => "SPACE".to_string(),
        KEY_LEFT => "LEFT".to_string(),
        KEY_UP => "UP".to_string(),
        KEY_RIGHT => "RIGHT".to_string(),
        KEY_DOWN => "DOWN".to_string(),
        KEY_LSHIFT => "LEFT SHIFT".to_string(),
        KEY_RSHIFT => "RIGHT SHIFT".to_string(),
        other => format!("KEY {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_takes_precedence() {
        assert_eq!(key_name(0x41, Some('a')), "A");
        assert_eq!(key_name(0x41, Some('A')), "A");
    }

    #[test]
    fn test_special_keys_named() {
        assert_eq!(key_name(KEY_SPACE, Some(' ')), "SPACE");
        assert_eq!(key_name(KEY_RETURN, None), "ENTER");
        assert_eq!(key_name(KEY_LEFT, None), "LEFT");
    }

    #[test]
    fn test_unknown_key_falls_back_to_code() {
        assert_eq!(key_name(0xFE, None), "KEY 254");
    }

    #[test]
    fn test_shift_detection() {
        assert!(is_shift(KEY_SHIFT));
        assert!(is_shift(KEY_LSHIFT));
        assert!(is_shift(KEY_RSHIFT));
        assert!(!is_shift(KEY_SPACE));
    }
}
