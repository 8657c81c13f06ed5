//! HID report classification and typed report values.

pub mod keyboard;
pub mod system_control;

#[cfg(test)]
mod tests;

use crate::config;

/// The report kinds the firmware can emit through its composite HID
/// device.
///
/// Wire values come from the firmware's report ID table (see
/// [`crate::config`]). Runtime IDs outside this set classify as
/// unknown via [`ReportId::from_u8`] returning `None` - no variant
/// exists for them, so the capture stays total without pretending to
/// enumerate every byte value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportId {
    /// Relative mouse.
    Mouse,
    /// Boot-protocol (6KRO) keyboard.
    BootKeyboard,
    /// Consumer control (media keys).
    ConsumerControl,
    /// System control (power/sleep/wake).
    SystemControl,
    /// Gamepad.
    Gamepad,
    /// Absolute-positioning mouse.
    AbsoluteMouse,
    /// N-key-rollover keyboard.
    NkroKeyboard,
}

impl ReportId {
    /// Classify a wire report ID. Returns `None` for IDs outside the
    /// recognized set (including the firmware's raw-HID channel, 3).
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            config::REPORT_ID_MOUSE => Some(ReportId::Mouse),
            config::REPORT_ID_BOOT_KEYBOARD => Some(ReportId::BootKeyboard),
            config::REPORT_ID_CONSUMER_CONTROL => Some(ReportId::ConsumerControl),
            config::REPORT_ID_SYSTEM_CONTROL => Some(ReportId::SystemControl),
            config::REPORT_ID_GAMEPAD => Some(ReportId::Gamepad),
            config::REPORT_ID_ABSOLUTE_MOUSE => Some(ReportId::AbsoluteMouse),
            config::REPORT_ID_NKRO_KEYBOARD => Some(ReportId::NkroKeyboard),
            _ => None,
        }
    }
}

/// One outgoing report as handed over by the transport seam.
///
/// Borrows the transport's buffer for the duration of a single
/// [`crate::ReportCapture::process_report`] call; never stored.
#[derive(Clone, Copy, Debug)]
pub struct RawReport<'a> {
    /// Wire report ID.
    pub id: u8,
    /// Report payload (meaning depends on `id`).
    pub data: &'a [u8],
    /// Transport status code. Accepted for interface completeness;
    /// the capture does not interpret it.
    pub result: i32,
}

impl<'a> RawReport<'a> {
    /// Bundle a report as the transport seam delivers it.
    pub const fn new(id: u8, data: &'a [u8], result: i32) -> Self {
        Self { id, data, result }
    }
}
