//! Windowing/paging materialization engine for lazily computed tables.
//!
//! A logical table can address millions of rows whose cell values are derived
//! on demand from time-indexed data sources. This crate never materializes
//! the whole table: it carves the row space (a
//! [`RowSelector`](lattice_model::RowSelector)) into fixed-size windows,
//! realizes one small [`Page`] per window by delegating each column to a
//! [`ColumnComputer`], and keeps a bounded number of pages cached.
//!
//! [`PagedTable`] is the consumer-facing façade: `row_count` /
//! `column_count` / `header` / `cell`, with cell values rendered to canonical
//! display strings.

#![forbid(unsafe_code)]

mod cache;
mod computer;
mod error;
mod format;
mod page;
mod table;

pub use crate::cache::CacheStats;
pub use crate::computer::ColumnComputer;
pub use crate::error::{ComputeError, TableError};
pub use crate::format::cell_text;
pub use crate::page::{Page, PageBuilder};
pub use crate::table::{PagedTable, TableOptions, ERROR_SENTINEL};
