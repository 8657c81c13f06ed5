//! Deferred-scan flag.
//!
//! The firmware's scan timer fires in interrupt context, but running
//! the matrix scan (and the report generation it triggers) inside the
//! ISR would mean guarding every reachable codepath against
//! preemption. Instead the ISR only sets this flag; the main loop
//! consumes it and runs the scan in ordinary control flow, which is
//! what lets the capture rely on a single writer.

use core::sync::atomic::{AtomicBool, Ordering};

/// One-shot scan request flag, set from interrupt context and
/// consumed by the main loop.
#[derive(Debug, Default)]
pub struct ScanFlag(AtomicBool);

impl ScanFlag {
    /// Create an unset flag.
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Request a scan. Safe to call from interrupt context.
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Consume a pending request. Returns `true` at most once per
    /// [`request`](Self::request).
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}
