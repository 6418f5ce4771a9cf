//! CA Bench Charts - GPU vs CPU benchmark bar charts
//!
//! Renders grouped, dual-series bar charts with a value annotation above every
//! bar, either in an interactive window or to a PNG file.

pub mod charts;
pub mod config;
pub mod error;
pub mod gui;
pub mod presets;
pub mod telemetry;

pub use charts::{render, ChartHandle, ChartLayout, ChartRequest, RenderTarget, Series};
pub use config::RenderOptions;
pub use error::{ChartError, Result};
