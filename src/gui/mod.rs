//! GUI module - interactive chart window

mod app;

pub use app::{show_chart, ChartWindow};
