//! Per-passenger state.

use pf_core::{PassengerClass, PassengerId, Tick};

/// Where a passenger is in the corridor.
///
/// Transitions move strictly forward:
/// `Queued → InScreening → InSegment1 → InSegment2 → Departed`.
/// Arrival is creation — a passenger object is enqueued the tick it comes
/// into existence.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Stage {
    /// Waiting in the FIFO entrance queue for a screening slot.
    Queued,
    /// Occupying one screening-zone slot for the fixed service duration.
    InScreening,
    /// Walking the first segment at the speed locked in at entry.
    InSegment1,
    /// Walking the second segment at the speed locked in at entry.
    InSegment2,
    /// Out of the system; state is frozen from this point on.
    Departed,
}

/// One passenger's identity, timestamps, and basic-time decomposition.
///
/// Owned exclusively by the engine during the run and mutated only by its
/// tick procedure; once `stage == Departed` the record never changes again.
/// Basic times are exact (distance over locked speed, or the fixed service
/// duration); everything else the passenger experienced — queueing plus
/// tick-rounding — shows up as extra time in the completion record.
#[derive(Clone, Debug)]
pub struct Passenger {
    pub id: PassengerId,
    pub class: PassengerClass,
    pub stage: Stage,

    /// Tick the passenger appeared at the entrance queue.
    pub arrived_at: Tick,
    pub screening_entry: Option<Tick>,
    pub segment1_entry: Option<Tick>,
    pub segment2_entry: Option<Tick>,
    pub departed_at: Option<Tick>,

    pub basic_service_secs: f64,
    pub basic_segment1_secs: f64,
    pub basic_segment2_secs: f64,
}

impl Passenger {
    /// A freshly arrived passenger, already queued.
    pub fn arrive(id: PassengerId, class: PassengerClass, now: Tick) -> Self {
        Self {
            id,
            class,
            stage: Stage::Queued,
            arrived_at: now,
            screening_entry: None,
            segment1_entry: None,
            segment2_entry: None,
            departed_at: None,
            basic_service_secs: 0.0,
            basic_segment1_secs: 0.0,
            basic_segment2_secs: 0.0,
        }
    }

    /// Sum of the three basic-time components (s).
    #[inline]
    pub fn basic_total_secs(&self) -> f64 {
        self.basic_service_secs + self.basic_segment1_secs + self.basic_segment2_secs
    }

    #[inline]
    pub fn is_departed(&self) -> bool {
        self.stage == Stage::Departed
    }
}
