//! Plain data row types written by output backends.
//!
//! Flattened copies of the engine's record types: plain integers instead of
//! typed ids, class as its canonical string.  Keeps the writers independent
//! of engine internals.

use pf_sim::{CompletionRecord, TickSnapshot};

/// Corridor state at one tick boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRow {
    pub tick: u64,
    pub time_secs: f64,
    pub queue_len: u32,
    pub screening_occupied: u32,
    pub segment1_occupied: u32,
    pub segment1_density: f64,
    pub segment2_occupied: u32,
    pub segment2_density: f64,
}

impl From<&TickSnapshot> for TickRow {
    fn from(snap: &TickSnapshot) -> Self {
        Self {
            tick: snap.tick.0,
            time_secs: snap.time_secs,
            queue_len: snap.queue_len,
            screening_occupied: snap.screening_occupied,
            segment1_occupied: snap.segment1_occupied,
            segment1_density: snap.segment1_density,
            segment2_occupied: snap.segment2_occupied,
            segment2_density: snap.segment2_density,
        }
    }
}

/// One departed passenger's transit-time decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionRow {
    pub passenger_id: u32,
    /// `"with-luggage"` or `"without-luggage"`.
    pub class: &'static str,
    pub arrival_secs: f64,
    pub departure_secs: f64,
    pub basic_service_secs: f64,
    pub basic_segment1_secs: f64,
    pub basic_segment2_secs: f64,
    pub basic_secs: f64,
    pub extra_secs: f64,
    pub total_secs: f64,
}

impl From<&CompletionRecord> for CompletionRow {
    fn from(record: &CompletionRecord) -> Self {
        Self {
            passenger_id: record.id.0,
            class: record.class.as_str(),
            arrival_secs: record.arrival_secs,
            departure_secs: record.departure_secs,
            basic_service_secs: record.basic_service_secs,
            basic_segment1_secs: record.basic_segment1_secs,
            basic_segment2_secs: record.basic_segment2_secs,
            basic_secs: record.basic_secs,
            extra_secs: record.extra_secs,
            total_secs: record.total_secs,
        }
    }
}
