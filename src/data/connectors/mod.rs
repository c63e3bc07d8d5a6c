mod tsv;
mod types;

pub use tsv::TsvConnector;
pub use types::{ProgressColumn, Table, TrainingData};
