use std::path::PathBuf;

use thiserror::Error;

/// Why a game table could not be loaded. No partial table is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed Arrow data: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("malformed Parquet file: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("{0}")]
    Malformed(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' expects a non-negative integer, got '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}
