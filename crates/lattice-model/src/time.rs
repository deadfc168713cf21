use serde::{Deserialize, Serialize};

/// Index into a [`TimeFrame`].
///
/// Row selectors address rows by frame index rather than raw time so that the
/// same selector can be evaluated against data sources sampled on different
/// clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeFrameIndex(pub i64);

impl TimeFrameIndex {
    pub fn value(self) -> i64 {
        self.0
    }
}

/// A contiguous span of frame indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeFrameInterval {
    pub start: TimeFrameIndex,
    pub end: TimeFrameIndex,
}

impl TimeFrameInterval {
    pub fn new(start: TimeFrameIndex, end: TimeFrameIndex) -> Self {
        Self { start, end }
    }
}

/// Mapping from frame indices to clock times for one recording.
///
/// Selectors hold the frame via `Arc` so windowing never duplicates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFrame {
    times: Vec<i64>,
}

impl TimeFrame {
    pub fn new(times: Vec<i64>) -> Self {
        Self { times }
    }

    /// A frame whose clock is its own index (`time_at(i) == i`).
    pub fn with_frame_count(count: usize) -> Self {
        Self {
            times: (0..count as i64).collect(),
        }
    }

    pub fn total_frame_count(&self) -> usize {
        self.times.len()
    }

    pub fn time_at(&self, index: TimeFrameIndex) -> Option<i64> {
        usize::try_from(index.0)
            .ok()
            .and_then(|i| self.times.get(i))
            .copied()
    }

    /// The largest addressable frame index, if the frame is non-empty.
    pub fn last_index(&self) -> Option<TimeFrameIndex> {
        if self.times.is_empty() {
            None
        } else {
            Some(TimeFrameIndex(self.times.len() as i64 - 1))
        }
    }
}
