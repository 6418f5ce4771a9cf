//! Render entry point: one request, one target.

use crate::charts::{ChartLayout, ChartRequest, StaticChartRenderer};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::gui;
use std::path::PathBuf;

/// Where a chart ends up.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderTarget {
    /// Interactive window, blocks until closed
    Window,
    /// PNG file on disk
    Png { path: PathBuf },
    /// Nothing drawn; the handle carries the layout
    Headless,
}

/// Result of a render call.
#[derive(Debug, Clone)]
pub struct ChartHandle {
    pub layout: ChartLayout,
    /// File written for `RenderTarget::Png`
    pub output: Option<PathBuf>,
}

impl ChartHandle {
    pub fn bar_count(&self) -> usize {
        self.layout.bars.len()
    }
}

/// Build the chart for `request` and present it on `target`.
///
/// The request is validated before any window or file is touched.
pub fn render(
    request: &ChartRequest,
    target: &RenderTarget,
    options: &RenderOptions,
) -> Result<ChartHandle> {
    let layout = ChartLayout::from_request(request)?;

    let output = match target {
        RenderTarget::Window => {
            gui::show_chart(layout.clone(), options)?;
            None
        }
        RenderTarget::Png { path } => {
            StaticChartRenderer::render_png(&layout, options, path)?;
            Some(path.clone())
        }
        RenderTarget::Headless => None,
    };

    Ok(ChartHandle { layout, output })
}
