use crate::error::PlotError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), PlotError>;

    /// Validation failure tagged with the section it came from.
    fn invalid(message: impl Into<String>) -> PlotError {
        PlotError::Configuration(format!("[{}] {}", Self::section_name(), message.into()))
    }
}
