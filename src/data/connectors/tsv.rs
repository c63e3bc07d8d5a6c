use crate::error::{PlotError, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use super::types::Table;

pub struct TsvConnector;

impl TsvConnector {
    /// Load a headerless, tab separated numeric file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => PlotError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => PlotError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let content = Self::drop_blank_lines(&bytes);
        if content.is_empty() {
            log::warn!("{} contains no rows", path.display());
            return Ok(Table::empty(path));
        }

        let df = Self::read_frame(&content).map_err(|e| PlotError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let table = Self::to_table(path, &df)?;
        log::debug!(
            "Loaded {} ({} rows, {} columns)",
            path.display(),
            table.height(),
            table.width()
        );
        Ok(table)
    }

    /// Every column is read as text first so that the numeric cast decides
    /// what parses, scientific notation included.
    fn read_frame(content: &[u8]) -> PolarsResult<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(false)
            .with_infer_schema_length(Some(0))
            .map_parse_options(|opts| opts.with_separator(b'\t'))
            .into_reader_with_file_handle(Cursor::new(content.to_vec()))
            .finish()?;

        let columns = df
            .get_columns()
            .iter()
            .map(|c| c.as_materialized_series().strict_cast(&DataType::Float64))
            .collect::<PolarsResult<Vec<Series>>>()?;

        DataFrame::new(columns.into_iter().map(Column::from).collect())
    }

    fn to_table(path: &Path, df: &DataFrame) -> Result<Table> {
        let mut columns = Vec::with_capacity(df.width());

        for (col_idx, column) in df.get_columns().iter().enumerate() {
            let values = column.f64().map_err(|e| PlotError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

            let mut parsed = Vec::with_capacity(values.len());
            for (row_idx, value) in values.into_iter().enumerate() {
                match value {
                    Some(v) => parsed.push(v),
                    None => {
                        return Err(PlotError::Parse {
                            path: path.to_path_buf(),
                            reason: format!(
                                "row {} has no value in field {}",
                                row_idx + 1,
                                col_idx + 1
                            ),
                        })
                    }
                }
            }
            columns.push(parsed);
        }

        Ok(Table::new(path, columns))
    }

    /// Lines holding only whitespace are skipped wherever they appear, so
    /// row numbers in errors count data rows only.
    fn drop_blank_lines(bytes: &[u8]) -> Vec<u8> {
        let mut content = Vec::with_capacity(bytes.len());
        for line in bytes.split(|b| *b == b'\n') {
            if line.iter().all(|b| matches!(b, b' ' | b'\t' | b'\r')) {
                continue;
            }
            content.extend_from_slice(line);
            content.push(b'\n');
        }
        content
    }
}
