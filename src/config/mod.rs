pub mod traits;
pub mod data;
pub mod window;
pub mod manager;

pub use manager::{ConfigManager, AppConfig, DEFAULT_CONFIG_FILE};
pub use data::DataConfig;
pub use window::WindowConfig;
