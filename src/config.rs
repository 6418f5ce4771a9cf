//! Render settings shared by the chart window and the PNG exporter.

use crate::charts::Series;

/// Series colors (matplotlib's default cycle: blue, orange)
pub const LEFT_COLOR: [u8; 3] = [31, 119, 180];
pub const RIGHT_COLOR: [u8; 3] = [255, 127, 14];

/// Knobs for drawing a chart. Override fields with struct-update syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Window inner size in logical points
    pub window_size: [f32; 2],
    /// PNG export size in pixels
    pub image_size: (u32, u32),
    pub left_color: [u8; 3],
    pub right_color: [u8; 3],
    pub annotation_font_size: f32,
    /// Gap between a bar top and its annotation, in points
    pub annotation_offset: f32,
    pub title_font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            window_size: [800.0, 600.0],
            image_size: (1024, 768),
            left_color: LEFT_COLOR,
            right_color: RIGHT_COLOR,
            annotation_font_size: 13.0,
            annotation_offset: 3.0,
            title_font_size: 20.0,
        }
    }
}

impl RenderOptions {
    pub fn series_color(&self, series: Series) -> [u8; 3] {
        match series {
            Series::Left => self.left_color,
            Series::Right => self.right_color,
        }
    }
}
