use lattice_model::SliceError;
use thiserror::Error;

/// Failure reported by a [`ColumnComputer`](crate::ColumnComputer).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComputeError {
    #[error("data source not found: {0}")]
    MissingSource(String),
    #[error("computed column has {actual} rows, window has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("{0}")]
    Failed(String),
}

/// Errors surfaced by the table façade.
///
/// The out-of-range variants are contract violations and always propagate to
/// the caller. `Build` is degraded to a per-cell sentinel by
/// [`PagedTable::cell`](crate::PagedTable::cell) so a single bad page never
/// blocks the rest of the table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("row {index} out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    #[error("column {index} out of range ({len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },
    #[error("failed to build page {page}: column '{column}': {source}")]
    Build {
        page: usize,
        column: String,
        #[source]
        source: ComputeError,
    },
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("selector windowing failed: {0}")]
    Window(#[from] SliceError),
}
