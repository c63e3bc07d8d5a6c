mod fit;
mod model;
mod polynomial;
mod progress;

pub use fit::{FitChart, FIT_SAMPLES, FIT_X_MAX, FIT_X_MIN, SCATTER_MARKER_AREA};
pub use model::{Chart, Series, SeriesKind, LINE_WIDTH};
pub use polynomial::{linspace, Polynomial};
pub use progress::{ProgressChart, ProgressSeries, YScale, LOG_FLOOR};
