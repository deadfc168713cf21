use crate::computer::ColumnComputer;
use crate::error::{ComputeError, TableError};
use lattice_model::{ColumnData, ColumnSpec, RowSelector};

/// A small, fully materialized, contiguous slice of the logical table.
///
/// Pages are immutable once built; the cache shares them via `Arc` and a
/// page handed out to a caller stays valid even if it is evicted afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    page_index: usize,
    row_count: usize,
    columns: Vec<ColumnData>,
}

impl Page {
    pub(crate) fn new(page_index: usize, row_count: usize, columns: Vec<ColumnData>) -> Self {
        Self {
            page_index,
            row_count,
            columns,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&ColumnData> {
        self.columns.get(index)
    }
}

/// Realizes one [`Page`] from a window and a list of column specs.
///
/// Building is a pure function of `(window, specs)` given a deterministic
/// computer: no hidden state, no partial output. The first failing column
/// aborts the whole build and the columns realized so far are dropped with
/// the local buffer.
pub struct PageBuilder<'a> {
    computer: &'a dyn ColumnComputer,
}

impl<'a> PageBuilder<'a> {
    pub fn new(computer: &'a dyn ColumnComputer) -> Self {
        Self { computer }
    }

    pub fn build(
        &self,
        page_index: usize,
        window: &RowSelector,
        specs: &[ColumnSpec],
    ) -> Result<Page, TableError> {
        let expected = window.len();
        let mut columns = Vec::with_capacity(specs.len());

        for spec in specs {
            let column = self
                .computer
                .compute(window, spec)
                .and_then(|column| {
                    if column.len() == expected {
                        Ok(column)
                    } else {
                        Err(ComputeError::LengthMismatch {
                            expected,
                            actual: column.len(),
                        })
                    }
                })
                .map_err(|source| TableError::Build {
                    page: page_index,
                    column: spec.name.clone(),
                    source,
                })?;
            columns.push(column);
        }

        Ok(Page::new(page_index, expected, columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_model::{ComputeKind, OutputType};
    use pretty_assertions::assert_eq;

    struct FixedComputer;

    impl ColumnComputer for FixedComputer {
        fn compute(
            &self,
            window: &RowSelector,
            spec: &ColumnSpec,
        ) -> Result<ColumnData, ComputeError> {
            match spec.name.as_str() {
                "short" => Ok(ColumnData::Int(vec![0])),
                "missing" => Err(ComputeError::MissingSource(spec.source_key.clone())),
                _ => Ok(ColumnData::Int(vec![7; window.len()])),
            }
        }
    }

    fn spec(name: &str) -> ColumnSpec {
        ColumnSpec::new(name, "src", ComputeKind::EventCount, OutputType::Int)
    }

    #[test]
    fn build_realizes_every_column() {
        let window = RowSelector::Index(vec![0, 1, 2]);
        let page = PageBuilder::new(&FixedComputer)
            .build(4, &window, &[spec("a"), spec("b")])
            .unwrap();

        assert_eq!(page.page_index(), 4);
        assert_eq!(page.row_count(), 3);
        assert_eq!(page.column_count(), 2);
        assert_eq!(page.column(1), Some(&ColumnData::Int(vec![7, 7, 7])));
    }

    #[test]
    fn first_failure_aborts_the_build() {
        let window = RowSelector::Index(vec![0, 1]);
        let err = PageBuilder::new(&FixedComputer)
            .build(0, &window, &[spec("a"), spec("missing"), spec("b")])
            .unwrap_err();

        assert_eq!(
            err,
            TableError::Build {
                page: 0,
                column: "missing".to_owned(),
                source: ComputeError::MissingSource("src".to_owned()),
            }
        );
    }

    #[test]
    fn length_mismatch_is_a_build_failure() {
        let window = RowSelector::Index(vec![0, 1, 2]);
        let err = PageBuilder::new(&FixedComputer)
            .build(1, &window, &[spec("short")])
            .unwrap_err();

        assert_eq!(
            err,
            TableError::Build {
                page: 1,
                column: "short".to_owned(),
                source: ComputeError::LengthMismatch {
                    expected: 3,
                    actual: 1,
                },
            }
        );
    }
}
