//! Progress bar styles and their formatting routines.
//!
//! This module defines the [`ProgressStyle`] enum and one formatting
//! routine per variant. Every routine produces the body of a rendered
//! line (label, bar glyphs, percentage); the renderer appends the timing
//! suffix and handles the in-place redraw.
//!
//! # Examples
//!
//! ## Selecting a Style by Name
//!
//! ```rust
//! use jbar::ProgressStyle;
//!
//! assert_eq!(ProgressStyle::from_name("arrow"), ProgressStyle::Arrow);
//! assert_eq!(ProgressStyle::from_name("SPINNER"), ProgressStyle::Spinner);
//! // Unrecognized names fall back to the default style.
//! assert_eq!(ProgressStyle::from_name("nope"), ProgressStyle::Basic);
//! ```

use crate::progress::color::{ColorScheme, Tone};

/// The symbols the Spinner style cycles through, one per render.
pub(crate) const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Visual style of a progress bar.
///
/// All styles render the same underlying progress state; they differ only
/// in glyphs, framing, and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressStyle {
    /// Solid block bar between pipes: `|█████░░░░░| 50.0%`.
    #[default]
    Basic,
    /// The Basic bar with the bar and percentage colored by completion
    /// threshold (red below 33%, yellow below 66%, green above).
    Colorful,
    /// Square glyphs without framing pipes: `■■■□□□ 50.0%`.
    Block,
    /// Bracketed arrow bar: `[>>>---] 50.0%`.
    Arrow,
    /// The Basic bar prefixed with a rotating `| / - \` spinner.
    Spinner,
    /// Percentage only, no bar glyphs: `50.0% Complete`.
    Percentage,
}

impl ProgressStyle {
    /// Map a case-insensitive style name to its variant.
    ///
    /// Unrecognized names silently fall back to [`ProgressStyle::Basic`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "basic" => ProgressStyle::Basic,
            "colorful" => ProgressStyle::Colorful,
            "block" => ProgressStyle::Block,
            "arrow" => ProgressStyle::Arrow,
            "spinner" => ProgressStyle::Spinner,
            "percentage" => ProgressStyle::Percentage,
            _ => ProgressStyle::Basic,
        }
    }

    /// Build the body of a rendered line for this style.
    pub(crate) fn compose(self, frame: &Frame<'_>, colors: &dyn ColorScheme) -> String {
        match self {
            ProgressStyle::Basic => basic_body(frame),
            ProgressStyle::Colorful => colorful_body(frame, colors),
            ProgressStyle::Block => block_body(frame),
            ProgressStyle::Arrow => arrow_body(frame),
            ProgressStyle::Spinner => spinner_body(frame),
            ProgressStyle::Percentage => percentage_body(frame),
        }
    }
}

/// A snapshot of everything a style needs to format one line.
pub(crate) struct Frame<'a> {
    pub label: &'a str,
    pub filled_length: usize,
    pub bar_length: usize,
    pub percentage: f64,
    pub spinner: char,
}

impl Frame<'_> {
    /// The bar glyph region: `filled_length` filled glyphs followed by
    /// empty glyphs up to `bar_length`.
    fn glyphs(&self, filled: char, empty: char) -> String {
        let mut bar = String::with_capacity(self.bar_length * filled.len_utf8());
        bar.extend(std::iter::repeat(filled).take(self.filled_length));
        bar.extend(std::iter::repeat(empty).take(self.bar_length - self.filled_length));
        bar
    }
}

fn basic_body(frame: &Frame<'_>) -> String {
    let bar = frame.glyphs('█', '░');
    format!("{}: |{bar}| {:.1}%", frame.label, frame.percentage)
}

fn colorful_body(frame: &Frame<'_>, colors: &dyn ColorScheme) -> String {
    let tone = Tone::for_percentage(frame.percentage);
    let bar = colors.paint(tone, &frame.glyphs('█', '░'));
    let percent = colors.paint(tone, &format!("{:.1}%", frame.percentage));
    format!("{}: |{bar}| {percent}", frame.label)
}

fn block_body(frame: &Frame<'_>) -> String {
    let bar = frame.glyphs('■', '□');
    format!("{}: {bar} {:.1}%", frame.label, frame.percentage)
}

fn arrow_body(frame: &Frame<'_>) -> String {
    let bar = frame.glyphs('>', '-');
    format!("{}: [{bar}] {:.1}%", frame.label, frame.percentage)
}

fn spinner_body(frame: &Frame<'_>) -> String {
    let bar = frame.glyphs('█', '░');
    format!(
        "{}: {} |{bar}| {:.1}%",
        frame.label, frame.spinner, frame.percentage
    )
}

fn percentage_body(frame: &Frame<'_>) -> String {
    format!("{}: {:.1}% Complete", frame.label, frame.percentage)
}
