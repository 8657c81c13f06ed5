//! NKRO keyboard report.
//!
//! Layout (16 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1-15: Key bitmap, one bit per usage code 0..119
//!            (bit n of byte k = usage code k*8 + n)
//! ```

use crate::config::{NKRO_KEYBOARD_REPORT_SIZE, NKRO_KEY_BYTES, NKRO_KEY_COUNT};
use crate::error::Error;

/// A decoded NKRO keyboard report.
///
/// Immutable once decoded; captured reports are compared and
/// inspected, never re-sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifiers: u8,
    /// Key bitmap, one bit per usage code.
    pub keys: [u8; NKRO_KEY_BYTES],
}

impl KeyboardReport {
    /// Decode from the raw report payload.
    ///
    /// Requires at least [`NKRO_KEYBOARD_REPORT_SIZE`] bytes; any
    /// trailing bytes (endpoint padding) are ignored.
    pub fn from_report_bytes(data: &[u8]) -> Result<Self, Error> {
        if data.len() < NKRO_KEYBOARD_REPORT_SIZE {
            return Err(Error::TruncatedReport {
                expected: NKRO_KEYBOARD_REPORT_SIZE,
                actual: data.len(),
            });
        }
        let mut keys = [0u8; NKRO_KEY_BYTES];
        keys.copy_from_slice(&data[1..NKRO_KEYBOARD_REPORT_SIZE]);
        Ok(Self {
            modifiers: data[0],
            keys,
        })
    }

    /// Is the given usage code held in this report?
    ///
    /// Codes outside the bitmap range are never held.
    pub fn contains(&self, keycode: u8) -> bool {
        let keycode = keycode as usize;
        if keycode >= NKRO_KEY_COUNT {
            return false;
        }
        self.keys[keycode / 8] & (1 << (keycode % 8)) != 0
    }

    /// All held usage codes, in ascending order.
    pub fn active_keycodes(&self) -> heapless::Vec<u8, NKRO_KEY_COUNT> {
        let mut codes = heapless::Vec::new();
        for (byte_index, byte) in self.keys.iter().enumerate() {
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    // Capacity equals the bitmap width, so this push
                    // cannot fail.
                    let _ = codes.push((byte_index * 8 + bit) as u8);
                }
            }
        }
        codes
    }

    /// Returns `true` if no keys and no modifiers are held (a
    /// release-everything report).
    pub fn is_empty(&self) -> bool {
        self.modifiers == 0 && self.keys.iter().all(|&b| b == 0)
    }
}
