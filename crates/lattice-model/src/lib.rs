//! `lattice-model` defines the core vocabulary for lazily materialized tables
//! over time-indexed data.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the paging/materialization engine (`lattice-view`)
//! - column-computation backends that implement the computer boundary
//! - configuration layers via `serde` (column specs are JSON-safe)

#![forbid(unsafe_code)]

mod column;
mod selector;
mod series;
mod spec;
mod time;

pub use crate::column::ColumnData;
pub use crate::selector::{
    IntervalAnchor, RowSelector, SelectorKind, SliceError, DEFAULT_CAPTURE_RADIUS,
};
pub use crate::series::{DigitalEventSeries, DigitalIntervalSeries};
pub use crate::spec::{ColumnSpec, ComputeKind, OutputType};
pub use crate::time::{TimeFrame, TimeFrameIndex, TimeFrameInterval};
