//! hidtap - capture harness for HID report traffic.
//!
//! Firmware under test emits tagged HID report blobs that would
//! normally go out over USB. `hidtap` sits where the transport would
//! be: each outgoing blob is fed to [`ReportCapture::process_report`],
//! which classifies it by report ID, decodes the supported kinds into
//! typed records, and accumulates them in arrival order. At a test
//! boundary, [`ReportCapture::snapshot`] freezes the accumulated
//! traffic into an immutable [`HidState`] and resets the capture, so
//! every test asserts against an isolated view of the stream.
//!
//! Supported report kinds:
//! - NKRO keyboard reports → [`KeyboardReport`]
//! - System control reports → [`SystemControlReport`]
//!
//! Everything else (boot keyboard, mouse, absolute mouse, gamepad,
//! consumer control, unknown IDs) is logged and dropped - the capture
//! never fails on unexpected traffic.
//!
//! The crate is `no_std` (with `alloc`) so captures can also run
//! on-target; host test binaries get `std` automatically.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod capture;
pub mod config;
pub mod error;
pub mod hid;
pub mod scan;

pub use capture::{HidState, ReportCapture};
pub use error::Error;
pub use hid::keyboard::KeyboardReport;
pub use hid::system_control::SystemControlReport;
pub use hid::{RawReport, ReportId};
pub use scan::ScanFlag;
