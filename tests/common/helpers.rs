//! Shared helpers for jbar integration tests.

#![allow(dead_code)]

use jbar::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory draw target standing in for stdout.
///
/// The bar takes one clone as its target; the test keeps another to read
/// back what was rendered.
#[derive(Clone, Default)]
pub struct CaptureTarget {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone())
            .expect("rendered output should be valid UTF-8")
    }

    /// The individual rendered frames, split on carriage returns.
    pub fn frames(&self) -> Vec<String> {
        self.contents()
            .split('\r')
            .filter(|frame| !frame.is_empty())
            .map(|frame| frame.trim_end_matches('\n').to_string())
            .collect()
    }

    /// The most recently rendered frame.
    pub fn last_frame(&self) -> String {
        self.frames().last().cloned().unwrap_or_default()
    }
}

impl Write for CaptureTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates a bar rendering into a capture target instead of stdout.
pub fn capture_bar(
    style: ProgressStyle,
    total: u64,
    bar_length: usize,
) -> (ProgressBar, CaptureTarget) {
    let target = CaptureTarget::new();
    let bar = ProgressBar::builder()
        .style(style)
        .total(total)
        .bar_length(bar_length)
        .target(target.clone())
        .build();
    (bar, target)
}

/// Drops the fixed-format ` [elapsed<eta]` timing suffix from a frame.
pub fn body(frame: &str) -> &str {
    frame
        .rfind(" [")
        .map(|idx| &frame[..idx])
        .expect("frame should carry a timing suffix")
}
