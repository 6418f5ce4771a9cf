//! Benchmark presets: GPU vs CPU cellular-automaton measurements at three grid sizes.

use crate::charts::{render, ChartHandle, ChartRequest, RenderTarget};
use crate::config::RenderOptions;
use crate::error::Result;

pub const GRID_SIZES: [&str; 3] = ["250x250", "500x500", "1300x1300"];
const X_AXIS_LABEL: &str = "Size of CA Grid";

/// Per-frame rendering time in microseconds.
pub fn rendering_time() -> ChartRequest {
    ChartRequest::new("Rendering time per frame")
        .with_labels(GRID_SIZES)
        .with_left("GPU", vec![428.75, 480.66, 1464.25])
        .with_right("CPU", vec![878.5, 3443.32, 21540.33])
        .with_axis_labels(X_AXIS_LABEL, "Time (μs)")
}

/// Frames per second.
pub fn frame_rate() -> ChartRequest {
    ChartRequest::new("Frame Rate Per Second")
        .with_labels(GRID_SIZES)
        .with_left("GPU", vec![1260.2, 580.0, 175.2])
        .with_right("CPU", vec![1145.5, 258.75, 45.5])
        .with_axis_labels(X_AXIS_LABEL, "FPS")
}

pub fn plot_rendering_time() -> Result<ChartHandle> {
    render(&rendering_time(), &RenderTarget::Window, &RenderOptions::default())
}

pub fn plot_frame_rate() -> Result<ChartHandle> {
    render(&frame_rate(), &RenderTarget::Window, &RenderOptions::default())
}
