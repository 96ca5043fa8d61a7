//! Jbar is a crate providing simple single-line terminal progress bars
//! with interchangeable visual styles.
//!
//! A bar redraws one terminal line in place, showing a visual bar, the
//! completion percentage, and the elapsed/estimated-remaining time. Six
//! styles are available: block-fill, colored, plain blocks, bracketed
//! arrow, spinner-prefixed, and percentage-only.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jbar::{ProgressBar, ProgressStyle, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let mut bar = ProgressBar::builder()
//!     .total(100)
//!     .style(ProgressStyle::Colorful)
//!     .label("Processing")
//!     .bar_length(40)
//!     .build();
//!
//! bar.start();
//! for done in 1..=100 {
//!     // ... do one unit of work ...
//!     bar.update(done)?;
//! }
//! bar.finish();
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The jbar crate is organized into two modules:
//!
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`progress`] - The progress bar renderer, styles, and color capability

pub mod error;
pub mod progress;

pub use error::{Error, Result};
pub use progress::{
    create_progress_bar, AnsiColorScheme, ColorScheme, PlainColorScheme, ProgressBar,
    ProgressBarBuilder, ProgressStyle, Tone,
};
