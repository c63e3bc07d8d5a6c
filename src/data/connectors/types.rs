use crate::error::{PlotError, Result};
use std::path::{Path, PathBuf};

/// Fixed column positions of a progress data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressColumn {
    Generation,
    BestError,
    AverageError,
}

impl ProgressColumn {
    pub fn index(&self) -> usize {
        match self {
            Self::Generation => 0,
            Self::BestError => 1,
            Self::AverageError => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generation => "generation_index",
            Self::BestError => "best_error",
            Self::AverageError => "average_error",
        }
    }
}

/// Numeric table loaded from a results file.
///
/// Rows keep the file's line order and columns keep the field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    path: PathBuf,
    columns: Vec<Vec<f64>>,
    height: usize,
}

impl Table {
    /// All columns must have the same length.
    pub fn new(path: impl Into<PathBuf>, columns: Vec<Vec<f64>>) -> Self {
        let height = columns.first().map_or(0, Vec::len);
        debug_assert!(columns.iter().all(|c| c.len() == height));
        Self {
            path: path.into(),
            columns,
            height,
        }
    }

    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Vec::new())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    /// Column by position. A table loaded from an empty file has no
    /// columns at all.
    pub fn column(&self, index: usize) -> Result<&[f64]> {
        self.columns
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| PlotError::ColumnOutOfRange {
                path: self.path.clone(),
                index,
                width: self.width(),
            })
    }

    pub fn progress_column(&self, column: ProgressColumn) -> Result<&[f64]> {
        self.column(column.index())
    }

    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.height {
            return None;
        }
        Some(self.columns.iter().map(|c| c[index]).collect())
    }

    /// Every value in row-major order.
    pub fn values(&self) -> Vec<f64> {
        (0..self.height)
            .flat_map(|r| self.columns.iter().map(move |c| c[r]))
            .collect()
    }
}

/// Sample points the polynomial was fitted to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingData {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl TrainingData {
    /// An empty training file is a valid set of zero points.
    pub fn from_table(table: &Table) -> Result<Self> {
        if table.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self {
            xs: table.column(0)?.to_vec(),
            ys: table.column(1)?.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            "sample.tsv",
            vec![vec![0.0, 1.0, 2.0], vec![5.0, 4.0, 3.0], vec![9.0, 8.0, 7.0]],
        )
    }

    #[test]
    fn test_shape_and_rows() {
        let table = sample();
        assert_eq!(table.height(), 3);
        assert_eq!(table.width(), 3);
        assert_eq!(table.row(1), Some(vec![1.0, 4.0, 8.0]));
        assert_eq!(table.row(3), None);
    }

    #[test]
    fn test_values_are_row_major() {
        let table = sample();
        assert_eq!(
            table.values(),
            vec![0.0, 5.0, 9.0, 1.0, 4.0, 8.0, 2.0, 3.0, 7.0]
        );
    }

    #[test]
    fn test_column_out_of_range() {
        let table = sample();
        match table.column(3) {
            Err(PlotError::ColumnOutOfRange { index, width, .. }) => {
                assert_eq!(index, 3);
                assert_eq!(width, 3);
            }
            other => panic!("expected ColumnOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_has_no_columns() {
        let table = Table::empty("empty.tsv");
        assert_eq!(table.width(), 0);
        assert!(matches!(
            table.column(0),
            Err(PlotError::ColumnOutOfRange { index: 0, width: 0, .. })
        ));
        assert!(table.values().is_empty());
    }

    #[test]
    fn test_empty_table_is_empty_training_data() {
        let data = TrainingData::from_table(&Table::empty("empty.tsv")).unwrap();
        assert!(data.is_empty());
        assert!(data.points().is_empty());
    }

    #[test]
    fn test_training_data_points() {
        let table = Table::new("t.tsv", vec![vec![-1.0, 2.0], vec![3.0, 4.0]]);
        let data = TrainingData::from_table(&table).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.points(), vec![[-1.0, 3.0], [2.0, 4.0]]);
    }
}
