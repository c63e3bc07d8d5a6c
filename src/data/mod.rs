pub mod batch;
pub mod connectors;

pub use batch::{Batch, FileRole};
pub use connectors::{ProgressColumn, Table, TrainingData, TsvConnector};
