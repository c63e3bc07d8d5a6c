use crate::config::DataConfig;
use std::path::{Path, PathBuf};

/// The result files written by one training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    ProgressData,
    TrainingData,
    InputPoly,
    OutputPoly,
}

impl FileRole {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::ProgressData => "progress_data",
            Self::TrainingData => "training_data",
            Self::InputPoly => "input_poly",
            Self::OutputPoly => "output_poly",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::ProgressData,
            Self::TrainingData,
            Self::InputPoly,
            Self::OutputPoly,
        ]
    }
}

/// A named group of result files sharing the `{name}_` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    name: String,
    results_dir: PathBuf,
}

impl Batch {
    pub fn new(name: impl Into<String>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            results_dir: results_dir.into(),
        }
    }

    /// Falls back to the configured default batch when no name is given.
    /// The name is used as is; a bad name surfaces when its files are loaded.
    pub fn resolve(name: Option<String>, config: &DataConfig) -> Self {
        let name = name.unwrap_or_else(|| config.default_batch.clone());
        Self::new(name, config.results_dir.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn path(&self, role: FileRole) -> PathBuf {
        self.results_dir
            .join(format!("{}_{}.tsv", self.name, role.suffix()))
    }
}
