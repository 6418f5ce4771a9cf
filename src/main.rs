//! CA Bench Charts
//!
//! Shows the rendering-time chart, then the frame-rate chart. Each window
//! blocks until it is closed.

use anyhow::Context;
use ca_bench_charts::{presets, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    presets::plot_rendering_time().context("rendering time chart")?;
    presets::plot_frame_rate().context("frame rate chart")?;

    Ok(())
}
