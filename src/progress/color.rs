//! Color capability for progress bar rendering.
//!
//! The Colorful style paints its bar and percentage with an ANSI color
//! picked from the completion percentage. Color support is a soft
//! capability: callers that disable it (or pipe output somewhere that
//! should stay plain) get byte-identical text with every escape sequence
//! replaced by nothing. The capability is selected once when the bar is
//! built, never re-checked per render.
//!
//! # Examples
//!
//! ```rust
//! use jbar::{ColorScheme, PlainColorScheme, Tone};
//!
//! let plain = PlainColorScheme;
//! assert_eq!(plain.paint(Tone::Red, "15.0%"), "15.0%");
//! assert_eq!(Tone::for_percentage(80.0), Tone::Green);
//! ```

use console::Style;
use std::fmt::Debug;

/// Color buckets used by the Colorful style.
///
/// The bucket is chosen from the completion percentage: red for the first
/// third, yellow for the second, green from 66% up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Early progress, below 33%.
    Red,
    /// Mid progress, below 66%.
    Yellow,
    /// Late progress, 66% and above.
    Green,
}

impl Tone {
    /// Pick the tone for a completion percentage in `[0, 100]`.
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage < 33.0 {
            Tone::Red
        } else if percentage < 66.0 {
            Tone::Yellow
        } else {
            Tone::Green
        }
    }
}

/// A provider of colored text segments.
///
/// Implementations either wrap the text in ANSI escape sequences or return
/// it untouched. The renderer holds one implementation for its whole
/// lifetime, so there is no per-render branching on color availability.
pub trait ColorScheme: Debug {
    /// Return `text` painted in the given tone, including any trailing
    /// reset sequence the scheme requires.
    fn paint(&self, tone: Tone, text: &str) -> String;
}

/// Color scheme emitting real ANSI escape sequences.
///
/// Styling is forced so the output is deterministic regardless of whether
/// the target is a terminal; callers that want plain output select
/// [`PlainColorScheme`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColorScheme;

impl ColorScheme for AnsiColorScheme {
    fn paint(&self, tone: Tone, text: &str) -> String {
        let style = match tone {
            Tone::Red => Style::new().red(),
            Tone::Yellow => Style::new().yellow(),
            Tone::Green => Style::new().green(),
        };
        style.force_styling(true).apply_to(text).to_string()
    }
}

/// No-op color scheme: every paint call returns the text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainColorScheme;

impl ColorScheme for PlainColorScheme {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }
}

/// Select the color scheme for a bar at construction time.
pub(crate) fn select_scheme(color_enabled: bool) -> Box<dyn ColorScheme> {
    if color_enabled {
        Box::new(AnsiColorScheme)
    } else {
        Box::new(PlainColorScheme)
    }
}
