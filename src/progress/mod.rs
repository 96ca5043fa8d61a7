//! Progress module containing the progress bar renderer.
//!
//! This module provides the single-line progress bar renderer, its visual
//! styles, and the color capability used by the Colorful style.
//!
//! # Overview
//!
//! The progress module is organized into three components:
//!
//! - `renderer` - The [`ProgressBar`] renderer, its builder, and the
//!   style-name factory
//! - `style` - The [`ProgressStyle`] variants and their formatting routines
//! - `color` - The soft color capability with ANSI and no-op schemes
//!
//! # Examples
//!
//! ## Driving a Bar
//!
//! ```rust,no_run
//! use jbar::{ProgressBar, ProgressStyle, Result};
//!
//! # fn example() -> Result<()> {
//! let mut bar = ProgressBar::builder()
//!     .total(100)
//!     .style(ProgressStyle::Colorful)
//!     .label("Sync")
//!     .build();
//!
//! bar.start();
//! bar.update(50)?;
//! bar.finish();
//! # Ok(())
//! # }
//! ```

pub(crate) mod color;
pub(crate) mod renderer;
pub(crate) mod style;

pub use color::{AnsiColorScheme, ColorScheme, PlainColorScheme, Tone};
pub use renderer::{create_progress_bar, ProgressBar, ProgressBarBuilder};
pub use style::ProgressStyle;
