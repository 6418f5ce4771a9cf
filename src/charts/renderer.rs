//! Static Chart Renderer
//! Draws a grouped bar layout to PNG with plotters, for use without a display.
//!
//! Layout:
//! 1. Caption: chart title
//! 2. Mesh with y description, x description and one x tick per category
//! 3. Two bar series, each bar annotated with its value
//! 4. Legend in the upper left corner

use crate::charts::{ChartLayout, Series};
use crate::config::RenderOptions;
use crate::error::{ChartError, Result};
use image::{ImageFormat, RgbImage};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::io::Cursor;
use std::path::Path;
use tracing::info;

const FONT: &str = "sans-serif";

fn to_rgb(rgb: [u8; 3]) -> RGBColor {
    RGBColor(rgb[0], rgb[1], rgb[2])
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart to a PNG file.
    pub fn render_png(layout: &ChartLayout, options: &RenderOptions, path: &Path) -> Result<()> {
        {
            let root = BitMapBackend::new(path, options.image_size).into_drawing_area();
            Self::draw(&root, layout, options)?;
            root.present()?;
        }
        info!(path = %path.display(), title = %layout.title, "exported chart");
        Ok(())
    }

    /// Render the chart to PNG bytes in memory.
    pub fn render_png_bytes(layout: &ChartLayout, options: &RenderOptions) -> Result<Vec<u8>> {
        let (width, height) = options.image_size;
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root =
                BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            Self::draw(&root, layout, options)?;
            root.present()?;
        }

        let img = RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
            ChartError::Rendering {
                message: "pixel buffer does not match image size".to_string(),
            }
        })?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn draw<DB>(
        root: &DrawingArea<DB, Shift>,
        layout: &ChartLayout,
        options: &RenderOptions,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let key_points: Vec<f64> = layout.ticks.iter().map(|t| t.position).collect();
        let n = layout.category_count();

        let mut chart = ChartBuilder::on(root)
            .caption(&layout.title, (FONT, options.title_font_size as f64 * 1.5))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                (layout.x_range.0..layout.x_range.1).with_key_points(key_points),
                layout.y_range.0..layout.y_range.1,
            )?;

        let x_formatter = |x: &f64| layout.tick_label(*x).unwrap_or_default().to_string();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&x_formatter)
            .x_desc(layout.x_axis_label.as_str())
            .y_desc(layout.y_axis_label.as_str())
            .draw()?;

        Self::draw_bars(&mut chart, layout, options)?;

        let annotation_style =
            TextStyle::from((FONT, options.annotation_font_size as f64).into_font())
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
        let offset = options.annotation_offset.round() as i32;

        chart.draw_series(layout.bars.iter().map(|b| {
            EmptyElement::at((b.center_x, b.height))
                + Text::new(b.annotation.clone(), (0, -offset), annotation_style.clone())
        }))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }

    /// Filled bars of both series, registered for the legend. Draws no text.
    fn draw_bars<DB, X>(
        chart: &mut ChartContext<'_, DB, Cartesian2d<X, RangedCoordf64>>,
        layout: &ChartLayout,
        options: &RenderOptions,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
        X: Ranged<ValueType = f64>,
    {
        for series in Series::BOTH {
            let color = to_rgb(options.series_color(series));

            chart
                .draw_series(layout.series_bars(series).map(|b| {
                    Rectangle::new(
                        [(b.left_edge(), 0.0), (b.right_edge(), b.height)],
                        color.filled(),
                    )
                }))?
                .label(layout.series_name(series))
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled())
                });
        }
        Ok(())
    }
}
