//! Unified error type for hidtap.
//!
//! All variants carry only fixed-size data so the type stays usable
//! from `no_std` captures. Implements `defmt::Format` behind the
//! `defmt` feature for on-target logging.

use core::fmt;

/// Errors surfaced by the capture harness.
///
/// Only [`Error::ReportIndex`] ever reaches test code through the
/// public API; decode failures are absorbed by the demultiplexer and
/// show up as dropped-report diagnostics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An indexed accessor was called with an index past the end of
    /// the captured sequence. Signals a test-code bug (asserting on a
    /// report that was never produced).
    ReportIndex {
        /// The requested index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// A report blob was shorter than its kind's wire format.
    TruncatedReport {
        /// Bytes the decoder needed.
        expected: usize,
        /// Bytes the blob actually carried.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ReportIndex { index, len } => {
                write!(f, "report index {index} out of range (captured {len})")
            }
            Error::TruncatedReport { expected, actual } => {
                write!(f, "truncated report: expected {expected} bytes, got {actual}")
            }
        }
    }
}
