use super::widgets::ChartPlot;
use crate::charts::Chart;
use crate::config::WindowConfig;
use crate::error::{PlotError, Result};
use eframe::NativeOptions;

pub struct ChartApp {
    chart: Chart,
}

impl ChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: Chart) -> Self {
        Self { chart }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.chart.title);
            });
            ui.separator();
            ChartPlot::new(&self.chart).show(ui);
        });
    }
}

/// Open a window with the chart and block until the user closes it.
pub fn show(chart: Chart, window: &WindowConfig) -> Result<()> {
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_title(chart.title.clone()),
        ..Default::default()
    };

    log::info!("Showing \"{}\", close the window to exit", chart.title);
    eframe::run_native(
        "genepi-plot",
        native_options,
        Box::new(move |cc| Ok(Box::new(ChartApp::new(cc, chart)))),
    )
    .map_err(|e| PlotError::Display(e.to_string()))
}
