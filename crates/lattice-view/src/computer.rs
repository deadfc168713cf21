use crate::error::ComputeError;
use lattice_model::{ColumnData, ColumnSpec, RowSelector};

/// The column-computation boundary.
///
/// Implementations resolve `spec.source_key` against whatever data backend
/// they own and realize one column for the given window. The engine calls
/// this synchronously, one column at a time, with windows no larger than the
/// configured page size.
///
/// Contract: on success the returned column must have exactly
/// `window.len()` rows. The page builder verifies this and turns violations
/// into a build failure, so a misbehaving computer can never produce a
/// short page.
pub trait ColumnComputer: Send + Sync {
    fn compute(&self, window: &RowSelector, spec: &ColumnSpec)
        -> Result<ColumnData, ComputeError>;
}
