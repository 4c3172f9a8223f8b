//! Capacity-gated admission into the screening zone.
//!
//! Only the screening zone is admission-controlled; the walking segments
//! accept unconditionally (see [`WalkingSegment::enter`][crate::WalkingSegment::enter]).
//! Rejection is not an error — it is the expected throttling behavior.  A
//! rejected passenger stays at the head of the entrance queue and is
//! re-attempted on the next tick.

use crate::area::ScreeningZone;

/// Outcome of one admission attempt.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Admission {
    Accepted,
    Rejected,
}

impl Admission {
    #[inline]
    pub fn is_accepted(self) -> bool {
        self == Admission::Accepted
    }
}

/// Accept iff `occupied < capacity`; on accept, one slot is claimed.
///
/// The caller records the passenger's zone-entry timestamp on `Accepted`
/// and leaves the queue untouched on `Rejected`.
#[inline]
pub fn try_admit(zone: &mut ScreeningZone) -> Admission {
    if zone.has_free_slot() {
        zone.occupy();
        Admission::Accepted
    } else {
        Admission::Rejected
    }
}
