use crate::spec::OutputType;
use crate::time::TimeFrameIndex;

/// One fully realized column for a window of rows.
///
/// A `ColumnData` is the output of a column computer: a dense vector with one
/// entry per row of the window it was computed for. The `TimeIndex` variant
/// exists for computers that emit raw frame indices (e.g. row-timestamp
/// columns); it carries no display rule and formats as `"?"`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Bool(Vec<bool>),
    Int(Vec<i64>),
    Float(Vec<f64>),
    ListBool(Vec<Vec<bool>>),
    ListInt(Vec<Vec<i64>>),
    ListFloat(Vec<Vec<f64>>),
    TimeIndex(Vec<TimeFrameIndex>),
}

impl ColumnData {
    /// Number of rows realized in this column.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Bool(v) => v.len(),
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::ListBool(v) => v.len(),
            ColumnData::ListInt(v) => v.len(),
            ColumnData::ListFloat(v) => v.len(),
            ColumnData::TimeIndex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The declared output type this payload corresponds to, if it has one.
    pub fn output_type(&self) -> Option<OutputType> {
        match self {
            ColumnData::Bool(_) => Some(OutputType::Bool),
            ColumnData::Int(_) => Some(OutputType::Int),
            ColumnData::Float(_) => Some(OutputType::Float),
            ColumnData::ListBool(_) => Some(OutputType::ListBool),
            ColumnData::ListInt(_) => Some(OutputType::ListInt),
            ColumnData::ListFloat(_) => Some(OutputType::ListFloat),
            ColumnData::TimeIndex(_) => None,
        }
    }
}
