//! Report capture - demultiplex, accumulate, snapshot.
//!
//! [`ReportCapture`] is the sink the transport seam feeds: every
//! outgoing report blob goes through [`ReportCapture::process_report`],
//! which classifies it by report ID and appends decoded NKRO keyboard
//! and system control reports to per-kind buffers in arrival order.
//! Unsupported kinds are logged and dropped; the capture never fails
//! on unexpected traffic.
//!
//! [`ReportCapture::snapshot`] moves the accumulated sequences into
//! an immutable [`HidState`] and leaves the capture empty, so each
//! test observes exactly the traffic produced since the previous
//! snapshot.

use alloc::vec::Vec;

use log::{error, info};

use crate::error::Error;
use crate::hid::keyboard::KeyboardReport;
use crate::hid::system_control::SystemControlReport;
use crate::hid::{RawReport, ReportId};

/// Accumulates decoded report traffic from the firmware under test.
///
/// Mutating operations take `&mut self`, which is also what makes
/// [`snapshot`](Self::snapshot) atomic: no `process_report` can
/// interleave between the buffer hand-off and the reset while the
/// capture is exclusively borrowed. A deployment with concurrent
/// producers must add its own mutual exclusion around the capture.
#[derive(Debug, Default)]
pub struct ReportCapture {
    keyboard_reports: Vec<KeyboardReport>,
    system_control_reports: Vec<SystemControlReport>,
}

impl ReportCapture {
    /// Create an empty capture.
    pub const fn new() -> Self {
        Self {
            keyboard_reports: Vec::new(),
            system_control_reports: Vec::new(),
        }
    }

    /// Classify one outgoing report and accumulate it if supported.
    ///
    /// Total over all inputs: unsupported kinds, unknown IDs, and
    /// undecodable blobs are logged and dropped. At most one buffer
    /// gains at most one entry per call. The transport status on
    /// `report` is accepted but not consulted.
    pub fn process_report(&mut self, report: RawReport<'_>) {
        match ReportId::from_u8(report.id) {
            Some(ReportId::NkroKeyboard) => {
                match KeyboardReport::from_report_bytes(report.data) {
                    Ok(decoded) => self.keyboard_reports.push(decoded),
                    Err(err) => error!("dropped NKRO keyboard report: {err}"),
                }
            }
            Some(ReportId::SystemControl) => {
                match SystemControlReport::from_report_bytes(report.data) {
                    Ok(decoded) => self.system_control_reports.push(decoded),
                    Err(err) => error!("dropped system control report: {err}"),
                }
            }
            Some(id @ (ReportId::BootKeyboard | ReportId::Mouse | ReportId::AbsoluteMouse)) => {
                error!("dropped {id:?} report: unimplemented");
            }
            Some(id @ (ReportId::Gamepad | ReportId::ConsumerControl)) => {
                info!("ignoring {id:?} report");
            }
            None => {
                error!("unknown HID report id {}", report.id);
            }
        }
    }

    /// Number of keyboard reports accumulated since the last
    /// snapshot or clear.
    pub fn pending_keyboard(&self) -> usize {
        self.keyboard_reports.len()
    }

    /// Number of system control reports accumulated since the last
    /// snapshot or clear.
    pub fn pending_system_control(&self) -> usize {
        self.system_control_reports.len()
    }

    /// Freeze the accumulated traffic into an immutable [`HidState`]
    /// and reset the capture to empty.
    ///
    /// The sequences are moved, not copied; the returned state owns
    /// them independently of the capture.
    pub fn snapshot(&mut self) -> HidState {
        HidState {
            keyboard_reports: core::mem::take(&mut self.keyboard_reports),
            system_control_reports: core::mem::take(&mut self.system_control_reports),
        }
    }

    /// Discard all accumulated reports without taking a snapshot.
    /// Used for test setup/teardown.
    pub fn clear(&mut self) {
        self.keyboard_reports.clear();
        self.system_control_reports.clear();
    }
}

/// An immutable point-in-time view of captured report traffic.
///
/// Produced by [`ReportCapture::snapshot`]; holds the per-kind
/// sequences in arrival order. Later capture activity never alters a
/// state that has already been taken.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HidState {
    keyboard_reports: Vec<KeyboardReport>,
    system_control_reports: Vec<SystemControlReport>,
}

impl HidState {
    /// All captured keyboard reports, in arrival order.
    pub fn keyboard_reports(&self) -> &[KeyboardReport] {
        &self.keyboard_reports
    }

    /// The `index`-th captured keyboard report.
    ///
    /// Fails with [`Error::ReportIndex`] when `index` is past the end
    /// of the sequence - asserting on a report that was never
    /// produced is a test bug and must fail loudly.
    pub fn keyboard(&self, index: usize) -> Result<&KeyboardReport, Error> {
        self.keyboard_reports.get(index).ok_or(Error::ReportIndex {
            index,
            len: self.keyboard_reports.len(),
        })
    }

    /// All captured system control reports, in arrival order.
    pub fn system_control_reports(&self) -> &[SystemControlReport] {
        &self.system_control_reports
    }

    /// The `index`-th captured system control report.
    ///
    /// Fails with [`Error::ReportIndex`] when `index` is past the end
    /// of the sequence.
    pub fn system_control(&self, index: usize) -> Result<&SystemControlReport, Error> {
        self.system_control_reports
            .get(index)
            .ok_or(Error::ReportIndex {
                index,
                len: self.system_control_reports.len(),
            })
    }
}
