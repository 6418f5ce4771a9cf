//! Chart Window
//! A single-chart eframe application. Running it blocks until the window is closed.

use crate::charts::{ChartLayout, ChartPlotter};
use crate::config::RenderOptions;
use crate::error::Result;
use eframe::egui;
use tracing::info;

/// Window hosting one grouped bar chart.
pub struct ChartWindow {
    layout: ChartLayout,
    options: RenderOptions,
}

impl ChartWindow {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        layout: ChartLayout,
        options: RenderOptions,
    ) -> Self {
        Self { layout, options }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_grouped_bars(ui, &self.layout, &self.options);
        });
    }
}

/// Open a window for the chart and wait until the user closes it.
pub fn show_chart(layout: ChartLayout, options: &RenderOptions) -> Result<()> {
    let title = layout.title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(options.window_size)
            .with_min_inner_size([400.0, 300.0])
            .with_title(&title),
        ..Default::default()
    };

    info!(title = %title, "showing chart window");
    let options = options.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, layout, options)))),
    )?;
    info!(title = %title, "chart window closed");
    Ok(())
}
