use super::traits::ConfigSection;
use crate::error::PlotError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the training process leaves its result files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub results_dir: PathBuf,
    pub default_batch: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("data"),
            default_batch: "default".to_string(),
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), PlotError> {
        if self.results_dir.as_os_str().is_empty() {
            return Err(Self::invalid("Results directory must not be empty"));
        }
        if self.default_batch.is_empty() {
            return Err(Self::invalid("Default batch name must not be empty"));
        }
        Ok(())
    }
}
