use crate::series::{DigitalEventSeries, DigitalIntervalSeries};
use crate::time::{TimeFrame, TimeFrameIndex, TimeFrameInterval};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SliceError {
    #[error("slice out of range: offset {offset} + count {count} > length {len}")]
    OutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },
}

/// Which addressing scheme a [`RowSelector`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Index,
    Timestamp,
    Interval,
}

/// The full ordered row-addressing space of a logical table.
///
/// A selector describes *which* rows a table has, independent of cell
/// content: plain indices into some backing collection, individual time
/// points, or time intervals. Windowing (`slice`) carves out a contiguous
/// sub-range while preserving the kind, so a column computer always sees the
/// same shape of selector the table was configured with.
///
/// Timestamp and interval selectors share their [`TimeFrame`] via `Arc`;
/// slicing never duplicates the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum RowSelector {
    Index(Vec<usize>),
    Timestamp {
        timestamps: Vec<TimeFrameIndex>,
        time_frame: Arc<TimeFrame>,
    },
    Interval {
        intervals: Vec<TimeFrameInterval>,
        time_frame: Arc<TimeFrame>,
    },
}

/// Where interval-derived selector windows are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalAnchor {
    Start,
    End,
}

/// Default half-width (in frames) for windows anchored on interval edges.
pub const DEFAULT_CAPTURE_RADIUS: i64 = 30_000;

impl RowSelector {
    /// Number of rows this selector addresses.
    pub fn len(&self) -> usize {
        match self {
            RowSelector::Index(indices) => indices.len(),
            RowSelector::Timestamp { timestamps, .. } => timestamps.len(),
            RowSelector::Interval { intervals, .. } => intervals.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> SelectorKind {
        match self {
            RowSelector::Index(_) => SelectorKind::Index,
            RowSelector::Timestamp { .. } => SelectorKind::Timestamp,
            RowSelector::Interval { .. } => SelectorKind::Interval,
        }
    }

    /// The time frame backing this selector, if it addresses rows by time.
    pub fn time_frame(&self) -> Option<&Arc<TimeFrame>> {
        match self {
            RowSelector::Index(_) => None,
            RowSelector::Timestamp { time_frame, .. } => Some(time_frame),
            RowSelector::Interval { time_frame, .. } => Some(time_frame),
        }
    }

    /// Carve out rows `[offset, offset + count)` as a selector of the same
    /// kind.
    ///
    /// `count == 0` is legal and yields an empty selector. The backing
    /// `TimeFrame` (if any) is shared with the receiver, not copied.
    pub fn slice(&self, offset: usize, count: usize) -> Result<RowSelector, SliceError> {
        let out_of_range = SliceError::OutOfRange {
            offset,
            count,
            len: self.len(),
        };
        let end = offset.checked_add(count).ok_or(out_of_range)?;
        if end > self.len() {
            return Err(out_of_range);
        }

        Ok(match self {
            RowSelector::Index(indices) => RowSelector::Index(indices[offset..end].to_vec()),
            RowSelector::Timestamp {
                timestamps,
                time_frame,
            } => RowSelector::Timestamp {
                timestamps: timestamps[offset..end].to_vec(),
                time_frame: Arc::clone(time_frame),
            },
            RowSelector::Interval {
                intervals,
                time_frame,
            } => RowSelector::Interval {
                intervals: intervals[offset..end].to_vec(),
                time_frame: Arc::clone(time_frame),
            },
        })
    }

    /// One row per frame of `time_frame`.
    pub fn all_frames(time_frame: Arc<TimeFrame>) -> RowSelector {
        let timestamps = (0..time_frame.total_frame_count() as i64)
            .map(TimeFrameIndex)
            .collect();
        RowSelector::Timestamp {
            timestamps,
            time_frame,
        }
    }

    /// One row per event in `series`.
    pub fn from_events(series: &DigitalEventSeries, time_frame: Arc<TimeFrame>) -> RowSelector {
        RowSelector::Timestamp {
            timestamps: series.events().to_vec(),
            time_frame,
        }
    }

    /// One row per interval in `series`, using the intervals as-is.
    pub fn from_intervals(
        series: &DigitalIntervalSeries,
        time_frame: Arc<TimeFrame>,
    ) -> RowSelector {
        RowSelector::Interval {
            intervals: series.intervals().to_vec(),
            time_frame,
        }
    }

    /// One row per interval in `series`, each widened to `anchor ± radius`
    /// frames and clamped to the bounds of `time_frame`.
    pub fn around_intervals(
        series: &DigitalIntervalSeries,
        time_frame: Arc<TimeFrame>,
        anchor: IntervalAnchor,
        radius: i64,
    ) -> RowSelector {
        let last = time_frame
            .last_index()
            .map(TimeFrameIndex::value)
            .unwrap_or(0);

        let intervals = series
            .intervals()
            .iter()
            .map(|interval| {
                let reference = match anchor {
                    IntervalAnchor::Start => interval.start.value(),
                    IntervalAnchor::End => interval.end.value(),
                };
                TimeFrameInterval::new(
                    TimeFrameIndex((reference - radius).max(0)),
                    TimeFrameIndex((reference + radius).min(last)),
                )
            })
            .collect();

        RowSelector::Interval {
            intervals,
            time_frame,
        }
    }
}
