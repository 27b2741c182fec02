//! Fixed-size keyboard hit-state array with edge detection

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Size of the hit-state array
pub const KEY_COUNT: usize = 256;

/// Map a winit key code to a slot in the hit-state array.
///
/// Only keys the demo can meaningfully react to are tracked; anything
/// else is ignored rather than risking index collisions.
fn key_index(key: KeyCode) -> Option<usize> {
    let index = match key {
        KeyCode::Escape => 0x01,
        KeyCode::Tab => 0x02,
        KeyCode::Enter => 0x03,
        KeyCode::Space => 0x04,

        KeyCode::Digit0 => 0x10,
        KeyCode::Digit1 => 0x11,
        KeyCode::Digit2 => 0x12,
        KeyCode::Digit3 => 0x13,
        KeyCode::Digit4 => 0x14,
        KeyCode::Digit5 => 0x15,
        KeyCode::Digit6 => 0x16,
        KeyCode::Digit7 => 0x17,
        KeyCode::Digit8 => 0x18,
        KeyCode::Digit9 => 0x19,

        KeyCode::KeyA => 0x20,
        KeyCode::KeyB => 0x21,
        KeyCode::KeyC => 0x22,
        KeyCode::KeyD => 0x23,
        KeyCode::KeyE => 0x24,
        KeyCode::KeyF => 0x25,
        KeyCode::KeyG => 0x26,
        KeyCode::KeyH => 0x27,
        KeyCode::KeyI => 0x28,
        KeyCode::KeyJ => 0x29,
        KeyCode::KeyK => 0x2A,
        KeyCode::KeyL => 0x2B,
        KeyCode::KeyM => 0x2C,
        KeyCode::KeyN => 0x2D,
        KeyCode::KeyO => 0x2E,
        KeyCode::KeyP => 0x2F,
        KeyCode::KeyQ => 0x30,
        KeyCode::KeyR => 0x31,
        KeyCode::KeyS => 0x32,
        KeyCode::KeyT => 0x33,
        KeyCode::KeyU => 0x34,
        KeyCode::KeyV => 0x35,
        KeyCode::KeyW => 0x36,
        KeyCode::KeyX => 0x37,
        KeyCode::KeyY => 0x38,
        KeyCode::KeyZ => 0x39,

        KeyCode::ArrowUp => 0x40,
        KeyCode::ArrowDown => 0x41,
        KeyCode::ArrowLeft => 0x42,
        KeyCode::ArrowRight => 0x43,

        _ => return None,
    };
    Some(index)
}

/// Keyboard hit-state for the current and previous frame.
///
/// `advance_frame` latches the current array as the previous one; a
/// rising edge is a key that is zero in the previous frame and nonzero
/// in the current one.
pub struct KeyboardState {
    keys: [u8; KEY_COUNT],
    prev_keys: [u8; KEY_COUNT],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            keys: [0; KEY_COUNT],
            prev_keys: [0; KEY_COUNT],
        }
    }

    /// Feed a key event into the hit-state array.
    ///
    /// Returns true if the key is tracked.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        match key_index(key) {
            Some(index) => {
                self.keys[index] = if state == ElementState::Pressed { 1 } else { 0 };
                true
            }
            None => false,
        }
    }

    /// Latch the current hit-state as the previous frame's state.
    ///
    /// Call once per frame, after edge queries for that frame are done.
    pub fn advance_frame(&mut self) {
        self.prev_keys = self.keys;
    }

    /// Snapshot of the full hit-state array
    pub fn hit_key_states(&self) -> [u8; KEY_COUNT] {
        self.keys
    }

    /// Is the key currently down?
    pub fn is_down(&self, key: KeyCode) -> bool {
        key_index(key).is_some_and(|i| self.keys[i] != 0)
    }

    /// Did the key go from up to down since the previous frame?
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        key_index(key).is_some_and(|i| self.prev_keys[i] == 0 && self.keys[i] != 0)
    }

    /// Did the key go from down to up since the previous frame?
    pub fn just_released(&self, key: KeyCode) -> bool {
        key_index(key).is_some_and(|i| self.prev_keys[i] != 0 && self.keys[i] == 0)
    }
}
