//! Tests for the progress bar state machine.
//!
//! This file covers the start/update/increment/finish lifecycle, the
//! range contract of `update`, the clamping contract of `increment`,
//! and session reuse.

use jbar::{create_progress_bar, Error, ProgressBar, ProgressStyle};

mod common;
use common::helpers::*;

#[test]
fn test_update_within_range_sets_current() {
    let (mut bar, _target) = capture_bar(ProgressStyle::Basic, 100, 10);
    for value in [0, 1, 50, 99, 100] {
        bar.update(value).expect("in-range update should succeed");
        assert_eq!(bar.current(), value);
    }
}

#[test]
fn test_update_above_total_is_rejected() {
    let (mut bar, _target) = capture_bar(ProgressStyle::Basic, 100, 10);
    bar.update(40).unwrap();

    let err = bar.update(101).expect_err("out-of-range update should fail");
    assert!(matches!(err, Error::OutOfRange { value: 101, total: 100 }));
    // State is untouched, so the caller can correct and retry.
    assert_eq!(bar.current(), 40);
}

#[test]
fn test_rejected_update_draws_nothing() {
    let (mut bar, target) = capture_bar(ProgressStyle::Basic, 100, 10);
    bar.update(500).expect_err("out-of-range update should fail");
    assert!(target.contents().is_empty());
}

#[test]
fn test_out_of_range_error_message() {
    let (mut bar, _target) = capture_bar(ProgressStyle::Basic, 10, 10);
    let err = bar.update(11).expect_err("out-of-range update should fail");
    assert_eq!(err.to_string(), "progress value 11 is out of range (0-10)");
}

#[test]
fn test_increment_advances_current() {
    let (mut bar, _target) = capture_bar(ProgressStyle::Basic, 100, 10);
    bar.increment(1);
    assert_eq!(bar.current(), 1);
    bar.increment(24);
    assert_eq!(bar.current(), 25);
    bar.increment(0);
    assert_eq!(bar.current(), 25);
}

#[test]
fn test_increment_clamps_at_total() {
    let (mut bar, _target) = capture_bar(ProgressStyle::Basic, 100, 10);
    bar.update(90).unwrap();

    // Unlike update, increment self-clamps instead of failing.
    bar.increment(25);
    assert_eq!(bar.current(), 100);
    bar.increment(u64::MAX);
    assert_eq!(bar.current(), 100);
}

#[test]
fn test_finish_forces_total_and_emits_newline() {
    let (mut bar, target) = capture_bar(ProgressStyle::Basic, 100, 10);
    bar.update(30).unwrap();
    bar.finish();

    assert_eq!(bar.current(), 100);
    let contents = target.contents();
    assert!(contents.ends_with('\n'));
    // Only the final line is terminated; in-place frames are not.
    assert_eq!(contents.matches('\n').count(), 1);
    assert_eq!(body(&target.last_frame()), "Progress: |██████████| 100.0%");
}

#[test]
fn test_start_renders_zero_percent() {
    let (mut bar, target) = capture_bar(ProgressStyle::Basic, 100, 10);
    bar.start();
    assert_eq!(bar.current(), 0);
    assert_eq!(body(&target.last_frame()), "Progress: |░░░░░░░░░░| 0.0%");
}

#[test]
fn test_start_begins_a_fresh_session() {
    let (mut bar, target) = capture_bar(ProgressStyle::Basic, 100, 10);
    bar.start();
    bar.update(70).unwrap();
    bar.finish();

    // The bar can be reused: start resets the progress and the clock.
    bar.start();
    assert_eq!(bar.current(), 0);
    assert_eq!(body(&target.last_frame()), "Progress: |░░░░░░░░░░| 0.0%");
}

#[test]
fn test_time_suffix_format_before_start() {
    let (mut bar, target) = capture_bar(ProgressStyle::Basic, 100, 10);
    // Without a start anchor, elapsed and eta are both zero.
    bar.update(50).unwrap();
    assert!(target.last_frame().ends_with(" [0.0s<0.0s]"));
}

#[test]
fn test_default_configuration() {
    let bar = ProgressBar::new();
    assert_eq!(bar.total(), 100);
    assert_eq!(bar.label(), "Progress");
    assert_eq!(bar.style(), ProgressStyle::Basic);
    assert_eq!(bar.current(), 0);
}

#[test]
fn test_builder_configuration() {
    let bar = ProgressBar::builder()
        .total(42)
        .style(ProgressStyle::Arrow)
        .label("Upload")
        .bar_length(20)
        .color_enabled(false)
        .build();
    assert_eq!(bar.total(), 42);
    assert_eq!(bar.label(), "Upload");
    assert_eq!(bar.style(), ProgressStyle::Arrow);
}

#[test]
fn test_factory_maps_style_names() {
    assert_eq!(create_progress_bar("basic").style(), ProgressStyle::Basic);
    assert_eq!(create_progress_bar("colorful").style(), ProgressStyle::Colorful);
    assert_eq!(create_progress_bar("block").style(), ProgressStyle::Block);
    assert_eq!(create_progress_bar("arrow").style(), ProgressStyle::Arrow);
    assert_eq!(create_progress_bar("spinner").style(), ProgressStyle::Spinner);
    assert_eq!(
        create_progress_bar("percentage").style(),
        ProgressStyle::Percentage
    );
}

#[test]
fn test_factory_is_case_insensitive() {
    assert_eq!(create_progress_bar("BLOCK").style(), ProgressStyle::Block);
    assert_eq!(create_progress_bar("Spinner").style(), ProgressStyle::Spinner);
}

#[test]
fn test_factory_falls_back_to_basic() {
    assert_eq!(create_progress_bar("rainbow").style(), ProgressStyle::Basic);
    assert_eq!(create_progress_bar("").style(), ProgressStyle::Basic);
}
