//! Grouped Bar Layout
//! Pure geometry shared by the interactive and the static renderer.
//!
//! Categories sit at unit spacing (0, 1, ..., N-1). Each category holds two bars
//! of fixed width, the left series just left of the category center and the
//! right series just right of it.

use crate::charts::request::{format_value, ChartRequest, Series};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Width of a single bar in category units.
pub const BAR_WIDTH: f64 = 0.15;

/// Headroom above the tallest bar so annotations stay inside the plot.
const Y_PADDING: f64 = 0.1;

/// One drawn bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub series: Series,
    pub category: usize,
    pub center_x: f64,
    pub width: f64,
    pub height: f64,
    /// Text drawn above the bar
    pub annotation: String,
}

impl BarGeometry {
    pub fn left_edge(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right_edge(&self) -> f64 {
        self.center_x + self.width / 2.0
    }
}

/// A category tick on the x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTick {
    pub position: f64,
    pub label: String,
}

/// Fully resolved chart, ready to be drawn by any backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub left_series_name: String,
    pub right_series_name: String,
    pub ticks: Vec<CategoryTick>,
    /// All left-series bars in category order, then all right-series bars.
    pub bars: Vec<BarGeometry>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl ChartLayout {
    /// Validate the request and compute bar positions, annotations and axis ranges.
    pub fn from_request(request: &ChartRequest) -> Result<Self> {
        request.validate()?;

        let n = request.category_count();
        let ticks: Vec<CategoryTick> = request
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| CategoryTick {
                position: i as f64,
                label: label.clone(),
            })
            .collect();

        let mut bars = Vec::with_capacity(2 * n);
        for series in Series::BOTH {
            let offset = match series {
                Series::Left => -BAR_WIDTH / 2.0,
                Series::Right => BAR_WIDTH / 2.0,
            };
            for (i, &value) in request.values(series).iter().enumerate() {
                bars.push(BarGeometry {
                    series,
                    category: i,
                    center_x: i as f64 + offset,
                    width: BAR_WIDTH,
                    height: value,
                    annotation: format_value(value),
                });
            }
        }

        let y_range = Self::value_range(bars.iter().map(|b| b.height));
        let x_range = (-0.5, n as f64 - 0.5);

        debug!(
            title = %request.title,
            categories = n,
            bars = bars.len(),
            y_min = y_range.0,
            y_max = y_range.1,
            "built grouped bar layout"
        );

        Ok(Self {
            title: request.title.clone(),
            x_axis_label: request.x_axis_label.clone(),
            y_axis_label: request.y_axis_label.clone(),
            left_series_name: request.left_series_name.clone(),
            right_series_name: request.right_series_name.clone(),
            ticks,
            bars,
            x_range,
            y_range,
        })
    }

    /// Bars start at zero, so the range always includes it.
    ///
    /// Each side is padded from its own magnitude and clamped, so the range stays
    /// finite for any finite input.
    fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let (min, max) = values.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min == 0.0 && max == 0.0 {
            return (0.0, 1.0);
        }
        let lo = if min < 0.0 {
            (min - min.abs() * Y_PADDING).max(f64::MIN)
        } else {
            0.0
        };
        let hi = if max > 0.0 {
            (max + max.abs() * Y_PADDING).min(f64::MAX)
        } else {
            0.0
        };
        (lo, hi)
    }

    pub fn category_count(&self) -> usize {
        self.ticks.len()
    }

    pub fn series_name(&self, series: Series) -> &str {
        match series {
            Series::Left => &self.left_series_name,
            Series::Right => &self.right_series_name,
        }
    }

    pub fn series_bars(&self, series: Series) -> impl Iterator<Item = &BarGeometry> {
        self.bars.iter().filter(move |b| b.series == series)
    }

    /// Category label for an x position, if it falls on a category.
    pub fn tick_label(&self, x: f64) -> Option<&str> {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return None;
        }
        self.ticks.get(idx as usize).map(|t| t.label.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
