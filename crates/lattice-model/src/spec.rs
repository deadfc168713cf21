use serde::{Deserialize, Serialize};

/// The scalar or vector shape a computed column produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Bool,
    Int,
    Float,
    ListBool,
    ListInt,
    ListFloat,
}

/// What a column computer is asked to derive for each row.
///
/// These names describe the computation contract only; the implementations
/// live behind the computer boundary in `lattice-view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeKind {
    /// Whether any event from the source falls inside the row's span.
    EventPresence,
    /// How many events from the source fall inside the row's span.
    EventCount,
    /// The event times inside the row's span, gathered into a list.
    EventGather,
    /// How many source intervals overlap the row's span.
    IntervalOverlapCount,
    /// Mean of the source samples inside the row's span.
    IntervalMean,
    /// Sum of the source samples inside the row's span.
    IntervalSum,
    /// The source sample at the row's time point.
    TimestampValue,
}

/// One column of a logical table: display name, which data source feeds it,
/// and what to compute from that source.
///
/// Specs are immutable and are supplied wholesale at configuration time; they
/// round-trip through `serde` so table layouts can live in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub source_key: String,
    pub computation: ComputeKind,
    pub output: OutputType,
}

impl ColumnSpec {
    pub fn new(
        name: impl Into<String>,
        source_key: impl Into<String>,
        computation: ComputeKind,
        output: OutputType,
    ) -> Self {
        Self {
            name: name.into(),
            source_key: source_key.into(),
            computation,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spec_round_trips_through_json() {
        let spec = ColumnSpec::new(
            "Spike Count",
            "spikes",
            ComputeKind::EventCount,
            OutputType::Int,
        );
        let json = serde_json::to_string(&spec).unwrap();
        let back: ColumnSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
        assert!(json.contains("\"event_count\""));
    }
}
