//! Descriptive statistics and chart-ready tables for video-game sales data.
//!
//! Load a dataset with [`data::loader::load_file`], then build a
//! [`Dashboard`] to classify columns, summarise the numeric ones, extract
//! headline insights and derive the four grouped sales tables.

pub mod cli;
pub mod columns;
pub mod data;
pub mod format;
pub mod insights;
pub mod output;
pub mod state;
pub mod summary;
pub mod tables;

pub use data::loader::{load_file, LoadError, LoadOptions};
pub use data::model::{ColumnClassification, ColumnKind, Dataset, Record};
pub use state::{Dashboard, ViewOptions};
