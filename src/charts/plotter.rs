//! Chart Plotter Module
//! Draws a grouped bar layout into an egui UI using egui_plot.

use crate::charts::{ChartLayout, Series};
use crate::config::RenderOptions;
use egui::{Align2, Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot, PlotPoint, Text};

pub fn to_color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Interactive grouped bar chart renderer.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bars of one series as egui_plot elements.
    pub fn series_chart(layout: &ChartLayout, series: Series, color: Color32) -> BarChart {
        let bars: Vec<Bar> = layout
            .series_bars(series)
            .map(|b| {
                Bar::new(b.center_x, b.height)
                    .width(b.width)
                    .fill(color)
                    .name(&b.annotation)
            })
            .collect();

        BarChart::new(bars)
            .color(color)
            .name(layout.series_name(series))
    }

    /// Draw title, axes, category ticks, both series, legend and the value above every bar.
    pub fn draw_grouped_bars(ui: &mut egui::Ui, layout: &ChartLayout, options: &RenderOptions) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&layout.title)
                    .size(options.title_font_size)
                    .strong(),
            );
        });
        ui.add_space(6.0);

        let tick_positions: Vec<f64> = layout.ticks.iter().map(|t| t.position).collect();
        let tick_layout = layout.clone();

        Plot::new(format!("grouped_bars_{}", layout.title))
            .legend(Legend::default())
            .x_axis_label(layout.x_axis_label.clone())
            .y_axis_label(layout.y_axis_label.clone())
            .allow_scroll(false)
            .include_x(layout.x_range.0)
            .include_x(layout.x_range.1)
            .include_y(layout.y_range.0)
            .include_y(layout.y_range.1)
            // One grid mark per category so every label gets a tick
            .x_grid_spacer(move |_input| {
                tick_positions
                    .iter()
                    .map(|&value| GridMark {
                        value,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                tick_layout
                    .tick_label(mark.value)
                    .map(str::to_string)
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for series in Series::BOTH {
                    let color = to_color32(options.series_color(series));
                    plot_ui.bar_chart(Self::series_chart(layout, series, color));
                }

                for bar in &layout.bars {
                    // Shift the anchor up in screen space so the gap is constant at any zoom
                    let top = PlotPoint::new(bar.center_x, bar.height);
                    let mut anchor = plot_ui.screen_from_plot(top);
                    anchor.y -= options.annotation_offset;
                    let position = plot_ui.plot_from_screen(anchor);

                    plot_ui.text(
                        Text::new(
                            position,
                            RichText::new(&bar.annotation).size(options.annotation_font_size),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}
