use super::traits::ConfigSection;
use crate::error::PlotError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
            min_width: 320.0,
            min_height: 240.0,
        }
    }
}

impl ConfigSection for WindowConfig {
    fn section_name() -> &'static str {
        "window"
    }

    fn validate(&self) -> Result<(), PlotError> {
        if self.min_width <= 0.0 || self.min_height <= 0.0 {
            return Err(Self::invalid("Minimum window size must be positive"));
        }
        if self.width < self.min_width || self.height < self.min_height {
            return Err(Self::invalid(format!(
                "Window size {}x{} is below the minimum {}x{}",
                self.width, self.height, self.min_width, self.min_height
            )));
        }
        Ok(())
    }
}
