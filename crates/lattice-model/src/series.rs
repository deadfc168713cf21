use crate::time::{TimeFrameIndex, TimeFrameInterval};

/// Discrete event times, expressed as frame indices into some [`TimeFrame`].
///
/// [`TimeFrame`]: crate::TimeFrame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitalEventSeries {
    events: Vec<TimeFrameIndex>,
}

impl DigitalEventSeries {
    pub fn new(events: Vec<TimeFrameIndex>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[TimeFrameIndex] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// On/off spans, expressed as frame-index intervals into some [`TimeFrame`].
///
/// [`TimeFrame`]: crate::TimeFrame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitalIntervalSeries {
    intervals: Vec<TimeFrameInterval>,
}

impl DigitalIntervalSeries {
    pub fn new(intervals: Vec<TimeFrameInterval>) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &[TimeFrameInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
