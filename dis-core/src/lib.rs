//! Core types for the state disability dashboard.
//!
//! - `row`: a single state's percentages and the bucket enums that index them
//! - `table`: the immutable `DataTable` loaded from CSV
//! - `melt`: wide-to-long projection of a row's age or gender columns
//! - `error`: `DataLoadError`

pub mod error;
pub mod melt;
pub mod row;
pub mod table;

pub use error::DataLoadError;
pub use melt::{melt, Bucket, MeltedRow};
pub use row::{AgeBucket, DisabilityCategory, Gender, JoinKey, Row};
pub use table::DataTable;
