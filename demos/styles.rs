//! Example cycling through every progress bar style.
//!
//! Run with `RUST_LOG=debug` to also see the session lifecycle events.

use color_eyre::Result;
use jbar::{ProgressBar, ProgressStyle};
use std::thread::sleep;
use std::time::Duration;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    for name in ["basic", "colorful", "block", "arrow", "spinner", "percentage"] {
        println!("{name} style:");

        let mut bar = ProgressBar::builder()
            .style(ProgressStyle::from_name(name))
            .label(name)
            .bar_length(30)
            .build();

        bar.start();
        for value in [0, 25, 50, 75, 100] {
            sleep(Duration::from_millis(300));
            bar.update(value)?;
        }
        bar.finish();
    }

    Ok(())
}
