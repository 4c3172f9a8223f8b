//! Plain data records emitted by the engine to observers.

use pf_core::{PassengerClass, PassengerId, Tick};

/// Per-tick state of all three corridor areas, taken after that tick's
/// transitions have settled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSnapshot {
    pub tick: Tick,
    pub time_secs: f64,
    /// Passengers waiting in the entrance queue.
    pub queue_len: u32,
    pub screening_occupied: u32,
    pub segment1_occupied: u32,
    pub segment1_density: f64,
    pub segment2_occupied: u32,
    pub segment2_density: f64,
}

/// One passenger's transit-time decomposition, emitted at departure.
///
/// `total_secs = basic_secs + extra_secs` holds by construction: extra time
/// is defined as the observed total minus the basic components, and the
/// round-up tick quantization guarantees it is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionRecord {
    pub id: PassengerId,
    pub class: PassengerClass,
    pub arrival_secs: f64,
    pub departure_secs: f64,
    pub basic_service_secs: f64,
    pub basic_segment1_secs: f64,
    pub basic_segment2_secs: f64,
    /// Sum of the three basic components.
    pub basic_secs: f64,
    /// Queueing delay plus tick rounding; always >= 0.
    pub extra_secs: f64,
    /// Departure minus arrival.
    pub total_secs: f64,
}
