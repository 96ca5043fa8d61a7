//! In-place progress bar rendering.
//!
//! This module provides the [`ProgressBar`] renderer and its builder. A
//! bar owns its configuration (total, style, label, bar width, color
//! capability), its mutable session state (current value, start instant,
//! spinner phase), and the draw target it writes to. Each mutating call
//! redraws a single terminal line in place by writing a carriage return
//! followed by the freshly formatted line.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use jbar::{ProgressBar, Result};
//!
//! # fn example() -> Result<()> {
//! let mut bar = ProgressBar::builder()
//!     .total(1000)
//!     .label("Indexing")
//!     .build();
//!
//! bar.start();
//! for _ in 0..1000 {
//!     // ... do one unit of work ...
//!     bar.increment(1);
//! }
//! bar.finish();
//! # Ok(())
//! # }
//! ```
//!
//! ## Creating a Bar from a Style Name
//!
//! ```rust,no_run
//! use jbar::create_progress_bar;
//!
//! let mut bar = create_progress_bar("spinner");
//! bar.start();
//! ```

use crate::error::{Error, Result};
use crate::progress::color::{select_scheme, ColorScheme};
use crate::progress::style::{Frame, ProgressStyle, SPINNER_FRAMES};

use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

/// A builder used to create a [`ProgressBar`].
///
/// ```rust
/// use jbar::{ProgressBar, ProgressStyle};
///
/// let bar = ProgressBar::builder()
///     .total(200)
///     .style(ProgressStyle::Arrow)
///     .label("Download")
///     .bar_length(30)
///     .build();
/// ```
pub struct ProgressBarBuilder {
    total: u64,
    style: ProgressStyle,
    label: String,
    bar_length: usize,
    color_enabled: bool,
    target: Option<Box<dyn Write>>,
}

impl Default for ProgressBarBuilder {
    fn default() -> Self {
        Self {
            total: 100,
            style: ProgressStyle::default(),
            label: String::from("Progress"),
            bar_length: 50,
            color_enabled: true,
            target: None,
        }
    }
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressBarBuilder::default()
    }

    /// Sets the value representing 100% completion.
    ///
    /// Must be greater than zero; the percentage and ETA math divide by it.
    pub fn total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Sets the visual style of the bar.
    pub fn style(mut self, style: ProgressStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the text printed as a prefix of every rendered line.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the character width of the bar glyph region.
    pub fn bar_length(mut self, bar_length: usize) -> Self {
        self.bar_length = bar_length;
        self
    }

    /// Enables or disables colored output for the Colorful style.
    ///
    /// When disabled, rendered lines contain no escape sequences at all.
    pub fn color_enabled(mut self, color_enabled: bool) -> Self {
        self.color_enabled = color_enabled;
        self
    }

    /// Redirects rendering to the given writer instead of standard output.
    pub fn target(mut self, target: impl Write + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    /// Builds the [`ProgressBar`].
    pub fn build(self) -> ProgressBar {
        debug_assert!(self.total > 0, "progress total must be greater than zero");
        ProgressBar {
            total: self.total,
            style: self.style,
            label: self.label,
            bar_length: self.bar_length,
            colors: select_scheme(self.color_enabled),
            current: 0,
            started_at: None,
            spinner_phase: 0,
            target: self.target.unwrap_or_else(|| Box::new(io::stdout())),
        }
    }
}

/// A single-line, in-place terminal progress bar.
///
/// The bar redraws one line per mutating call by prefixing the output with
/// a carriage return, and only [`finish`](ProgressBar::finish) terminates
/// the line with a newline. Rendering is best-effort: write failures on
/// the draw target are ignored so display problems can never fail the
/// work being tracked.
///
/// A bar is not safe for concurrent use; callers in multi-threaded
/// contexts must serialize access to it (every mutating call takes
/// `&mut self`, so the borrow checker enforces this within one process).
pub struct ProgressBar {
    total: u64,
    style: ProgressStyle,
    label: String,
    bar_length: usize,
    colors: Box<dyn ColorScheme>,
    current: u64,
    started_at: Option<Instant>,
    spinner_phase: usize,
    target: Box<dyn Write>,
}

impl ProgressBar {
    /// Creates a progress bar with the default configuration.
    pub fn new() -> Self {
        ProgressBarBuilder::new().build()
    }

    /// Creates a builder for configuring a progress bar.
    pub fn builder() -> ProgressBarBuilder {
        ProgressBarBuilder::new()
    }

    /// Begins a progress session.
    ///
    /// Anchors the elapsed-time clock at the current instant, resets the
    /// progress to zero, and draws the initial 0% line. Calling `start`
    /// again later begins a fresh session on the same bar.
    pub fn start(&mut self) {
        debug!(total = self.total, label = %self.label, "starting progress session");
        self.started_at = Some(Instant::now());
        self.current = 0;
        self.render();
    }

    /// Sets the progress to an absolute value and redraws.
    ///
    /// Unlike [`increment`](ProgressBar::increment), out-of-range values
    /// are rejected rather than clamped: values above the configured total
    /// return [`Error::OutOfRange`], leave the state untouched, and draw
    /// nothing.
    pub fn update(&mut self, value: u64) -> Result<()> {
        if value > self.total {
            return Err(Error::OutOfRange {
                value,
                total: self.total,
            });
        }
        self.current = value;
        self.render();
        Ok(())
    }

    /// Advances the progress by `delta` and redraws.
    ///
    /// Unlike [`update`](ProgressBar::update), this never fails: the new
    /// value silently clamps at the configured total.
    pub fn increment(&mut self, delta: u64) {
        self.current = self.current.saturating_add(delta).min(self.total);
        self.render();
    }

    /// Completes the bar: forces the progress to the total, draws the
    /// final line, and terminates it with a newline so subsequent output
    /// starts fresh.
    pub fn finish(&mut self) {
        self.current = self.total;
        self.render();
        let _ = writeln!(self.target);
        let _ = self.target.flush();
        debug!(total = self.total, label = %self.label, "progress session finished");
    }

    /// The current progress value.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// The value representing 100% completion.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The visual style of this bar.
    pub fn style(&self) -> ProgressStyle {
        self.style
    }

    /// The label prefixed to every rendered line.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Redraw the line in place.
    fn render(&mut self) {
        let line = self.compose_line();
        let _ = write!(self.target, "\r{line}");
        let _ = self.target.flush();
    }

    /// Format the full line for the current state.
    ///
    /// Rendering the Spinner style advances the spinner phase as a side
    /// effect, one step per composed line.
    fn compose_line(&mut self) -> String {
        let percentage = (self.current as f64 / self.total as f64) * 100.0;
        // Multiply before dividing so the fill truncates, never rounds up.
        let filled_length = (self.bar_length as u64 * self.current / self.total) as usize;

        let elapsed = self
            .started_at
            .map(|anchor| anchor.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        // Linear extrapolation from the cumulative average rate.
        let eta = if self.current > 0 {
            (elapsed / self.current as f64) * (self.total - self.current) as f64
        } else {
            0.0
        };

        let spinner = SPINNER_FRAMES[self.spinner_phase];
        if self.style == ProgressStyle::Spinner {
            self.spinner_phase = (self.spinner_phase + 1) % SPINNER_FRAMES.len();
        }

        let frame = Frame {
            label: &self.label,
            filled_length,
            bar_length: self.bar_length,
            percentage,
            spinner,
        };
        let body = self.style.compose(&frame, self.colors.as_ref());
        format!("{body} [{elapsed:.1}s<{eta:.1}s]")
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a progress bar from a style name with the default configuration.
///
/// The name is matched case-insensitively; unrecognized names fall back to
/// the Basic style. For non-default configuration, combine
/// [`ProgressStyle::from_name`] with [`ProgressBar::builder`].
///
/// ```rust
/// use jbar::{create_progress_bar, ProgressStyle};
///
/// let bar = create_progress_bar("block");
/// assert_eq!(bar.style(), ProgressStyle::Block);
/// ```
pub fn create_progress_bar(style_name: &str) -> ProgressBar {
    ProgressBar::builder()
        .style(ProgressStyle::from_name(style_name))
        .build()
}
