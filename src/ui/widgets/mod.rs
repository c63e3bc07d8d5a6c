mod chart_plot;

pub use chart_plot::ChartPlot;
