//! Unit tests for report classification and decoding.
//!
//! These run on the host and cover the pure logic: ID → kind
//! mapping, bounds-checked decoding, and the keycode views test
//! assertions are built on.

use super::keyboard::KeyboardReport;
use super::system_control::{
    SystemControlReport, SYSTEM_POWER_DOWN, SYSTEM_SLEEP, SYSTEM_WAKE_UP,
};
use super::{RawReport, ReportId};
use crate::config::*;
use crate::error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Report ID Classification Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn report_id_covers_the_recognized_set() {
    assert_eq!(ReportId::from_u8(REPORT_ID_MOUSE), Some(ReportId::Mouse));
    assert_eq!(
        ReportId::from_u8(REPORT_ID_BOOT_KEYBOARD),
        Some(ReportId::BootKeyboard)
    );
    assert_eq!(
        ReportId::from_u8(REPORT_ID_CONSUMER_CONTROL),
        Some(ReportId::ConsumerControl)
    );
    assert_eq!(
        ReportId::from_u8(REPORT_ID_SYSTEM_CONTROL),
        Some(ReportId::SystemControl)
    );
    assert_eq!(ReportId::from_u8(REPORT_ID_GAMEPAD), Some(ReportId::Gamepad));
    assert_eq!(
        ReportId::from_u8(REPORT_ID_ABSOLUTE_MOUSE),
        Some(ReportId::AbsoluteMouse)
    );
    assert_eq!(
        ReportId::from_u8(REPORT_ID_NKRO_KEYBOARD),
        Some(ReportId::NkroKeyboard)
    );
}

#[test]
fn report_id_rejects_values_outside_the_set() {
    // 3 is the firmware's raw-HID channel - deliberately unassigned.
    for id in [0u8, 3, 9, 10, 0x80, 0xFF] {
        assert_eq!(ReportId::from_u8(id), None, "id {id}");
    }
}

#[test]
fn raw_report_borrows_its_payload() {
    let payload = [0xAAu8; 4];
    let raw = RawReport::new(REPORT_ID_GAMEPAD, &payload, 0);
    assert_eq!(raw.id, REPORT_ID_GAMEPAD);
    assert_eq!(raw.data, &payload);
    assert_eq!(raw.result, 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// NKRO Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_decodes_modifiers_and_bitmap() {
    let mut data = [0u8; NKRO_KEYBOARD_REPORT_SIZE];
    data[0] = 0x02; // Left Shift
    data[1] = 0x10; // bit 4 of byte 0 → usage 0x04 ('A')
    let report = KeyboardReport::from_report_bytes(&data).unwrap();

    assert_eq!(report.modifiers, 0x02);
    assert!(report.contains(0x04));
    assert!(!report.contains(0x05));
    assert!(!report.is_empty());
}

#[test]
fn keyboard_report_rejects_truncated_payload() {
    assert_eq!(
        KeyboardReport::from_report_bytes(&[]),
        Err(Error::TruncatedReport {
            expected: NKRO_KEYBOARD_REPORT_SIZE,
            actual: 0
        })
    );
    assert_eq!(
        KeyboardReport::from_report_bytes(&[0u8; NKRO_KEYBOARD_REPORT_SIZE - 1]),
        Err(Error::TruncatedReport {
            expected: NKRO_KEYBOARD_REPORT_SIZE,
            actual: NKRO_KEYBOARD_REPORT_SIZE - 1
        })
    );
}

#[test]
fn keyboard_report_ignores_trailing_padding() {
    let mut data = [0u8; NKRO_KEYBOARD_REPORT_SIZE + 4];
    data[1] = 0x01; // usage 0
    data[NKRO_KEYBOARD_REPORT_SIZE] = 0xFF; // padding, must not decode
    let report = KeyboardReport::from_report_bytes(&data).unwrap();
    assert_eq!(report.active_keycodes().as_slice(), &[0x00]);
}

#[test]
fn keyboard_report_empty_when_nothing_held() {
    let data = [0u8; NKRO_KEYBOARD_REPORT_SIZE];
    let report = KeyboardReport::from_report_bytes(&data).unwrap();
    assert!(report.is_empty());
    assert!(report.active_keycodes().is_empty());
}

#[test]
fn keyboard_report_modifiers_alone_are_not_empty() {
    let mut data = [0u8; NKRO_KEYBOARD_REPORT_SIZE];
    data[0] = 0x01; // Left Ctrl
    let report = KeyboardReport::from_report_bytes(&data).unwrap();
    assert!(!report.is_empty());
    assert!(report.active_keycodes().is_empty());
}

#[test]
fn keyboard_report_active_keycodes_ascend() {
    let mut data = [0u8; NKRO_KEYBOARD_REPORT_SIZE];
    // usages 0x04, 0x05, 0x1D ('A', 'B', 'Z') and the last bitmap bit
    data[1] = 0x30;
    data[1 + 0x1D / 8] |= 1 << (0x1D % 8);
    data[NKRO_KEYBOARD_REPORT_SIZE - 1] |= 0x80;
    let report = KeyboardReport::from_report_bytes(&data).unwrap();

    let last = (NKRO_KEY_COUNT - 1) as u8;
    assert_eq!(report.active_keycodes().as_slice(), &[0x04, 0x05, 0x1D, last]);
    assert!(report.contains(last));
}

#[test]
fn keyboard_report_contains_rejects_out_of_range_usages() {
    let mut data = [0u8; NKRO_KEYBOARD_REPORT_SIZE];
    data.iter_mut().skip(1).for_each(|b| *b = 0xFF);
    let report = KeyboardReport::from_report_bytes(&data).unwrap();
    assert!(report.contains((NKRO_KEY_COUNT - 1) as u8));
    assert!(!report.contains(NKRO_KEY_COUNT as u8));
    assert!(!report.contains(0xFF));
}

// ═══════════════════════════════════════════════════════════════════════════
// System Control Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn system_control_report_decodes_usage() {
    let report = SystemControlReport::from_report_bytes(&[SYSTEM_SLEEP]).unwrap();
    assert_eq!(report.usage, SYSTEM_SLEEP);
    assert!(!report.is_release());
}

#[test]
fn system_control_report_zero_is_release() {
    let report = SystemControlReport::from_report_bytes(&[0x00]).unwrap();
    assert!(report.is_release());
}

#[test]
fn system_control_report_rejects_empty_payload() {
    assert_eq!(
        SystemControlReport::from_report_bytes(&[]),
        Err(Error::TruncatedReport {
            expected: SYSTEM_CONTROL_REPORT_SIZE,
            actual: 0
        })
    );
}

#[test]
fn system_control_report_ignores_trailing_bytes() {
    let report = SystemControlReport::from_report_bytes(&[SYSTEM_WAKE_UP, 0xFF]).unwrap();
    assert_eq!(report.usage, SYSTEM_WAKE_UP);
}

#[test]
fn system_control_usage_constants() {
    assert_eq!(SYSTEM_POWER_DOWN, 0x81);
    assert_eq!(SYSTEM_SLEEP, 0x82);
    assert_eq!(SYSTEM_WAKE_UP, 0x83);
}
