//! End-of-run summary types.

/// Transit-time statistics over one set of completions (one class, or all
/// passengers combined).
///
/// A zero-completion set yields all-zero statistics; means are defined as
/// `0.0` rather than NaN so empty runs stay comparable and serializable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassSummary {
    pub completed: u64,
    pub mean_total_secs: f64,
    pub max_total_secs: f64,
    pub mean_basic_secs: f64,
    pub max_basic_secs: f64,
    pub mean_extra_secs: f64,
    pub max_extra_secs: f64,
}

/// Aggregate statistics for a whole run, produced by
/// [`MetricsAggregator::summary`][crate::MetricsAggregator::summary].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub overall: ClassSummary,
    pub with_luggage: ClassSummary,
    pub without_luggage: ClassSummary,

    /// Longest entrance queue observed at any tick boundary.
    pub peak_queue_len: u32,
    pub peak_screening_occupied: u32,
    pub peak_segment1_density: f64,
    pub peak_segment2_density: f64,

    /// Departure time of the first passenger out (s); `None` if nobody
    /// completed.
    pub first_departure_secs: Option<f64>,
    /// Departure time of the last passenger out (s).
    pub last_departure_secs: Option<f64>,
}
