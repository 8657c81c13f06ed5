//! Protocol constants shared across the crate.
//!
//! Report ID values and report geometry live here so they can be
//! checked against the firmware's descriptor table in one place.

// HID report IDs
//
// These match the firmware's composite-device report ID table. ID 3
// is the firmware's raw-HID channel; it is not a capture target and
// classifies as unknown.

/// Relative mouse report.
pub const REPORT_ID_MOUSE: u8 = 1;

/// Boot-protocol (6KRO) keyboard report.
pub const REPORT_ID_BOOT_KEYBOARD: u8 = 2;

/// Consumer control (media keys) report.
pub const REPORT_ID_CONSUMER_CONTROL: u8 = 4;

/// System control (power/sleep/wake) report.
pub const REPORT_ID_SYSTEM_CONTROL: u8 = 5;

/// Gamepad report.
pub const REPORT_ID_GAMEPAD: u8 = 6;

/// Absolute-positioning mouse report.
pub const REPORT_ID_ABSOLUTE_MOUSE: u8 = 7;

/// N-key-rollover keyboard report.
pub const REPORT_ID_NKRO_KEYBOARD: u8 = 8;

// NKRO keyboard report geometry

/// Number of key usages covered by the NKRO bitmap.
pub const NKRO_KEY_COUNT: usize = 120;

/// Size of the NKRO key bitmap in bytes.
pub const NKRO_KEY_BYTES: usize = NKRO_KEY_COUNT / 8;

/// Total NKRO keyboard report size: modifier byte + key bitmap.
pub const NKRO_KEYBOARD_REPORT_SIZE: usize = 1 + NKRO_KEY_BYTES;

/// System control report size: a single usage byte.
pub const SYSTEM_CONTROL_REPORT_SIZE: usize = 1;
