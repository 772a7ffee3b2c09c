use thiserror::Error;

/// Failure to load a [`DataTable`](crate::DataTable). Loads are all-or-nothing.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read data source: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column `{0}` is missing")]
    MissingColumn(String),
    #[error("row {line}: column `{column}` has non-numeric value `{value}`")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
    #[error("join id {0} appears more than once")]
    DuplicateKey(u32),
}
