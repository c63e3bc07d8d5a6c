use super::{
    data::DataConfig,
    traits::ConfigSection,
    window::WindowConfig,
};
use crate::error::PlotError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "genepi-plot.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub window: WindowConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PlotError> {
        self.data.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layer an optional TOML file over the built-in defaults.
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, PlotError> {
        let source = match explicit {
            Some(path) => config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                .required(true),
            None => config::File::new(DEFAULT_CONFIG_FILE, config::FileFormat::Toml)
                .required(false),
        };

        let config: AppConfig = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);

        Ok(Self { config })
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), PlotError>
    where
        F: FnOnce(&mut AppConfig),
    {
        f(&mut self.config);
        self.config.validate()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
