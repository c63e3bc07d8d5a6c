//! Charts for inspecting the results of a genetic polynomial-fitting run.
//!
//! The training process writes tab separated result files per batch into a
//! results directory. This crate loads them and draws either the error
//! progress over generations or the learned polynomial against the given one
//! and the training points.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod ui;

pub use error::{PlotError, Result};
