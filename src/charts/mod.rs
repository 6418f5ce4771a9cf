//! Charts module - grouped bar layout and its renderers

mod layout;
mod plotter;
mod render;
mod renderer;
mod request;

pub use layout::{BarGeometry, CategoryTick, ChartLayout, BAR_WIDTH};
pub use plotter::ChartPlotter;
pub use render::{render, ChartHandle, RenderTarget};
pub use renderer::StaticChartRenderer;
pub use request::{format_value, ChartRequest, Series};
