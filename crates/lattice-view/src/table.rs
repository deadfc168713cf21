use crate::cache::{CacheStats, PageCache};
use crate::computer::ColumnComputer;
use crate::error::TableError;
use crate::format;
use crate::page::{Page, PageBuilder};
use lattice_model::{ColumnData, ColumnSpec, RowSelector};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Sentinel rendered for cells whose page failed to build.
pub const ERROR_SENTINEL: &str = "Error";

#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    /// Rows per materialized page.
    pub page_size_rows: usize,
    /// Max number of pages kept cached.
    pub cache_capacity: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size_rows: 256,
            cache_capacity: 10,
        }
    }
}

enum Source {
    Empty,
    Paged {
        selector: RowSelector,
        specs: Vec<ColumnSpec>,
        computer: Arc<dyn ColumnComputer>,
    },
    Complete {
        page: Arc<Page>,
    },
}

/// Random-access view over a logical table whose cells are computed on
/// demand.
///
/// The table owns its configuration (row selector, column specs, computer)
/// and an embedded page cache; two independently configured tables never
/// share cache state. Reads (`cell`, `header`, counts) take `&self` and only
/// lock the cache interior, so a `PagedTable` can be shared behind `Arc`.
/// Reconfiguration takes `&mut self`, which statically rules out a
/// `configure` racing an in-flight page fetch.
///
/// For any fixed configuration, `cell` is idempotent: eviction history can
/// make a read slower (the page is rebuilt), never different.
pub struct PagedTable {
    source: Source,
    headers: Vec<String>,
    page_size: usize,
    cache: Mutex<PageCache>,
}

impl Default for PagedTable {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl PagedTable {
    pub fn new(options: TableOptions) -> Self {
        Self {
            source: Source::Empty,
            headers: Vec::new(),
            page_size: options.page_size_rows.max(1),
            cache: Mutex::new(PageCache::new(options.cache_capacity)),
        }
    }

    /// Replace the logical table wholesale: new row space, new columns, new
    /// computation backend. Invalidates every cached page.
    pub fn configure(
        &mut self,
        selector: RowSelector,
        specs: Vec<ColumnSpec>,
        computer: Arc<dyn ColumnComputer>,
    ) {
        self.headers = specs.iter().map(|spec| spec.name.clone()).collect();
        self.source = Source::Paged {
            selector,
            specs,
            computer,
        };
        self.invalidate();
    }

    /// Install a fully materialized table; reads bypass the pager entirely.
    ///
    /// All columns must agree on length.
    pub fn set_complete_table(
        &mut self,
        columns: Vec<(String, ColumnData)>,
    ) -> Result<(), TableError> {
        let expected = columns.first().map(|(_, data)| data.len()).unwrap_or(0);
        for (name, data) in &columns {
            if data.len() != expected {
                return Err(TableError::RaggedColumns {
                    column: name.clone(),
                    expected,
                    actual: data.len(),
                });
            }
        }

        let (headers, data): (Vec<_>, Vec<_>) = columns.into_iter().unzip();
        self.headers = headers;
        self.source = Source::Complete {
            page: Arc::new(Page::new(0, expected, data)),
        };
        self.invalidate();
        Ok(())
    }

    /// Drop the configuration and every cached page.
    pub fn clear(&mut self) {
        self.source = Source::Empty;
        self.headers.clear();
        self.invalidate();
    }

    /// Change the windowing granularity. `0` and the current size are
    /// no-ops; any real change invalidates the cache (page boundaries
    /// moved).
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 || page_size == self.page_size {
            return;
        }
        self.page_size = page_size;
        self.invalidate();
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn row_count(&self) -> usize {
        match &self.source {
            Source::Empty => 0,
            Source::Paged { selector, .. } => selector.len(),
            Source::Complete { page } => page.row_count(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn header(&self, column: usize) -> Result<&str, TableError> {
        self.headers
            .get(column)
            .map(String::as_str)
            .ok_or(TableError::ColumnOutOfRange {
                index: column,
                len: self.headers.len(),
            })
    }

    /// 1-based row number for display alongside the grid.
    pub fn row_label(&self, row: usize) -> String {
        (row + 1).to_string()
    }

    /// Render the cell at `(row, column)`.
    ///
    /// Out-of-range indices are caller bugs and fail hard. A page that fails
    /// to build degrades to the [`ERROR_SENTINEL`] string instead: one bad
    /// column must never block access to the rest of the table. Failed pages
    /// are not cached, so the next access retries the build.
    pub fn cell(&self, row: usize, column: usize) -> Result<String, TableError> {
        let rows = self.row_count();
        if row >= rows {
            return Err(TableError::RowOutOfRange { index: row, len: rows });
        }
        if column >= self.headers.len() {
            return Err(TableError::ColumnOutOfRange {
                index: column,
                len: self.headers.len(),
            });
        }

        match &self.source {
            Source::Empty => Err(TableError::RowOutOfRange { index: row, len: 0 }),
            Source::Complete { page } => Ok(page_cell(page, row, column)),
            Source::Paged {
                selector,
                specs,
                computer,
            } => {
                let page_index = row / self.page_size;
                let local_row = row % self.page_size;
                match self.page_for(page_index, selector, specs, computer.as_ref()) {
                    Ok(page) => Ok(page_cell(&page, local_row, column)),
                    Err(_) => Ok(ERROR_SENTINEL.to_owned()),
                }
            }
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().expect("page cache mutex poisoned").stats()
    }

    pub fn cached_page_count(&self) -> usize {
        self.cache.lock().expect("page cache mutex poisoned").len()
    }

    fn invalidate(&mut self) {
        self.cache
            .get_mut()
            .expect("page cache mutex poisoned")
            .invalidate();
    }

    fn page_for(
        &self,
        page_index: usize,
        selector: &RowSelector,
        specs: &[ColumnSpec],
        computer: &dyn ColumnComputer,
    ) -> Result<Arc<Page>, TableError> {
        {
            let mut cache = self.cache.lock().expect("page cache mutex poisoned");
            if let Some(hit) = cache.get(page_index) {
                return Ok(hit);
            }
        }

        let start = page_index * self.page_size;
        let count = self.page_size.min(selector.len() - start);
        let window = selector.slice(start, count)?;

        let page = PageBuilder::new(computer)
            .build(page_index, &window, specs)
            .map_err(|err| {
                warn!(page = page_index, error = %err, "failed to materialize table page");
                err
            })?;

        let page = Arc::new(page);
        let mut cache = self.cache.lock().expect("page cache mutex poisoned");
        cache.insert(page_index, Arc::clone(&page));
        Ok(page)
    }
}

fn page_cell(page: &Page, local_row: usize, column: usize) -> String {
    if local_row >= page.row_count() {
        return ERROR_SENTINEL.to_owned();
    }
    match page.column(column) {
        Some(data) => format::cell_text(data, local_row),
        None => ERROR_SENTINEL.to_owned(),
    }
}
