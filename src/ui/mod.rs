mod app;
mod widgets;

pub use app::{show, ChartApp};
pub use widgets::ChartPlot;
