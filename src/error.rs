//! Error handling for the jbar library.
//!
//! This module provides centralized error handling for progress bar
//! operations. All errors implement the standard Error trait and carry
//! enough context for the caller to correct the offending call and retry.

use thiserror::Error;

/// Errors that can happen when using jbar.
///
/// Progress rendering itself is best-effort and never fails; the only
/// fallible operation is [`ProgressBar::update`](crate::ProgressBar::update),
/// which rejects values outside the configured range.
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied progress value falls outside `[0, total]`.
    ///
    /// The renderer's state is left untouched and nothing is drawn, so the
    /// caller can correct the value and retry.
    #[error("progress value {value} is out of range (0-{total})")]
    OutOfRange {
        /// The rejected progress value.
        value: u64,
        /// The configured completion value.
        total: u64,
    },
}

/// Result type alias for operations that can fail with a jbar error.
pub type Result<T> = std::result::Result<T, Error>;
