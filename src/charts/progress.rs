use super::model::{Chart, Series};
use crate::data::{Batch, FileRole, ProgressColumn, Table, TsvConnector};
use crate::error::Result;

pub const TITLE: &str = "Training process error progress";
pub const X_LABEL: &str = "Generations";
pub const Y_LABEL: &str = "Error";
pub const BEST_LABEL: &str = "error of individual with best fitness";
pub const AVERAGE_LABEL: &str = "average error of entire population";

/// Stand-in for non-positive errors on a log scale.
pub const LOG_FLOOR: f64 = 1e-10;

/// Which error curves to draw against the generation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressSeries {
    #[default]
    Both,
    Average,
    Best,
}

impl ProgressSeries {
    /// Columns in drawing order; best comes before average.
    pub fn columns(&self) -> Vec<ProgressColumn> {
        match self {
            Self::Both => vec![ProgressColumn::BestError, ProgressColumn::AverageError],
            Self::Average => vec![ProgressColumn::AverageError],
            Self::Best => vec![ProgressColumn::BestError],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YScale {
    #[default]
    Linear,
    Log10,
}

impl YScale {
    fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log10 => value.max(LOG_FLOOR).log10(),
        }
    }
}

/// Error progress over generations, read from `{batch}_progress_data.tsv`.
#[derive(Debug, Clone, Default)]
pub struct ProgressChart {
    series: ProgressSeries,
    scale: YScale,
}

impl ProgressChart {
    pub fn new(series: ProgressSeries) -> Self {
        Self {
            series,
            scale: YScale::Linear,
        }
    }

    pub fn with_scale(mut self, scale: YScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn from_batch(&self, batch: &Batch) -> Result<Chart> {
        let path = batch.path(FileRole::ProgressData);
        log::info!("Loading progress data from {}", path.display());
        let table = TsvConnector::load(&path)?;
        self.build(&table)
    }

    /// Only the columns the selected series need are read, so a best-only
    /// chart works on a two column table.
    pub fn build(&self, table: &Table) -> Result<Chart> {
        let generations = table.progress_column(ProgressColumn::Generation)?;

        let y_label = match self.scale {
            YScale::Linear => Y_LABEL.to_string(),
            YScale::Log10 => format!("{} (log10)", Y_LABEL),
        };
        let mut chart = Chart::new(TITLE, X_LABEL, y_label).with_tight_bounds(true);

        for column in self.series.columns() {
            let errors = table.progress_column(column)?;
            if let Some(last) = errors.last() {
                log::info!(
                    "{} after {} generations: {}",
                    column.as_str(),
                    errors.len(),
                    last
                );
            }

            let points = generations
                .iter()
                .zip(errors)
                .map(|(&g, &e)| [g, self.scale.apply(e)])
                .collect();
            chart = chart.with_series(Series::line(Self::label(column), points));
        }

        Ok(chart)
    }

    fn label(column: ProgressColumn) -> &'static str {
        match column {
            ProgressColumn::BestError => BEST_LABEL,
            ProgressColumn::AverageError => AVERAGE_LABEL,
            ProgressColumn::Generation => X_LABEL,
        }
    }
}
