use crate::charts::{Chart, SeriesKind};
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points};

/// Series colours, assigned in drawing order.
const SERIES_COLORS: [Color32; 4] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
];

pub struct ChartPlot<'a> {
    chart: &'a Chart,
}

impl<'a> ChartPlot<'a> {
    pub fn new(chart: &'a Chart) -> Self {
        Self { chart }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("chart_plot")
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label(self.chart.x_label.clone())
            .y_axis_label(self.chart.y_label.clone())
            .show_grid(true);

        if self.chart.tight_bounds {
            plot = plot.set_margin_fraction(egui::Vec2::ZERO);
        }

        plot.show(ui, |plot_ui| {
            for (idx, series) in self.chart.series.iter().enumerate() {
                let name = series.name.clone().unwrap_or_default();
                let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                let points: PlotPoints = series.points.iter().copied().collect();

                match series.kind {
                    SeriesKind::Line { width } => {
                        plot_ui.line(Line::new(name, points).color(color).width(width));
                    }
                    SeriesKind::Scatter { radius } => {
                        plot_ui.points(Points::new(name, points).color(color).radius(radius));
                    }
                }
            }
        });
    }
}
