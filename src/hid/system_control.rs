//! System control report - power/sleep/wake requests.
//!
//! System control lives on the Generic Desktop usage page and is
//! transmitted as a one-byte report carrying a single usage code, or
//! zero when the key is released.

use crate::config::SYSTEM_CONTROL_REPORT_SIZE;
use crate::error::Error;

/// System Power Down usage code.
pub const SYSTEM_POWER_DOWN: u8 = 0x81;

/// System Sleep usage code.
pub const SYSTEM_SLEEP: u8 = 0x82;

/// System Wake Up usage code.
pub const SYSTEM_WAKE_UP: u8 = 0x83;

/// A decoded system control report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemControlReport {
    /// Usage code; zero means released.
    pub usage: u8,
}

impl SystemControlReport {
    /// Decode from the raw report payload.
    ///
    /// Requires at least one byte; trailing bytes are ignored.
    pub fn from_report_bytes(data: &[u8]) -> Result<Self, Error> {
        match data.first() {
            Some(&usage) => Ok(Self { usage }),
            None => Err(Error::TruncatedReport {
                expected: SYSTEM_CONTROL_REPORT_SIZE,
                actual: 0,
            }),
        }
    }

    /// Returns `true` for the key-up report (usage zero).
    pub fn is_release(&self) -> bool {
        self.usage == 0
    }
}
