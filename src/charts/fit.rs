use super::model::{Chart, Series};
use super::polynomial::{linspace, Polynomial};
use crate::data::{Batch, FileRole, Table, TrainingData, TsvConnector};
use crate::error::Result;

pub const TITLE: &str = "Input/output polynomials and training data points";
pub const INPUT_LABEL: &str = "given polynomial";
pub const OUTPUT_LABEL: &str = "result polynomial";

/// The curves are always drawn over this window, whatever the data covers.
pub const FIT_X_MIN: f64 = -10.0;
pub const FIT_X_MAX: f64 = 10.0;
pub const FIT_SAMPLES: usize = 1000;

/// Marker area of a training point in square pixels.
pub const SCATTER_MARKER_AREA: f32 = 10.0;

/// Training points with the given and the learned polynomial on top.
#[derive(Debug, Clone, Default)]
pub struct FitChart;

impl FitChart {
    pub fn new() -> Self {
        Self
    }

    pub fn from_batch(&self, batch: &Batch) -> Result<Chart> {
        let load = |role: FileRole| {
            let path = batch.path(role);
            log::info!("Loading {} from {}", role.suffix(), path.display());
            TsvConnector::load(path)
        };

        let training = load(FileRole::TrainingData)?;
        let input = load(FileRole::InputPoly)?;
        let output = load(FileRole::OutputPoly)?;
        self.build(&training, &input, &output)
    }

    pub fn build(&self, training: &Table, input: &Table, output: &Table) -> Result<Chart> {
        let data = TrainingData::from_table(training)?;
        let given = Polynomial::from_ascending(input.values())?;
        let result = Polynomial::from_ascending(output.values())?;

        log::info!("Given polynomial:  {}", given);
        log::info!("Result polynomial: {}", result);
        log::info!("{} training points", data.len());

        let xs = Self::sample_xs();
        Ok(Chart::new(TITLE, "x", "y")
            .with_series(Series::scatter(Self::marker_radius(), data.points()))
            .with_series(Series::line(INPUT_LABEL, given.sample(&xs)))
            .with_series(Series::line(OUTPUT_LABEL, result.sample(&xs))))
    }

    pub fn sample_xs() -> Vec<f64> {
        linspace(FIT_X_MIN, FIT_X_MAX, FIT_SAMPLES)
    }

    fn marker_radius() -> f32 {
        (SCATTER_MARKER_AREA / std::f32::consts::PI).sqrt()
    }
}
