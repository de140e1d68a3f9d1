//! Error types for characterization table loading and lookup.

use std::path::PathBuf;

/// Errors that can occur while loading or reading a characterization table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A table file could not be read.
    #[error("failed to read table {path}: {source}")]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A table file is malformed.
    #[error("{table}:{line}: {message}")]
    Parse {
        /// The table name.
        table: String,
        /// The 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A table has a header but no data rows.
    #[error("table {0} has no rows")]
    Empty(String),

    /// A lookup asked for a column the table does not carry.
    #[error("table {table} has no '{column}' column")]
    MissingColumn {
        /// The table name.
        table: String,
        /// The requested column header.
        column: &'static str,
    },
}
