//! Corridor areas: the capacity-bounded screening zone and the two
//! density-sensitive walking segments.
//!
//! Areas are long-lived — created once per run, mutated every tick, and
//! owned exclusively by the engine.  The screening zone enforces a hard
//! occupancy cap; the walking segments have no cap at all, only a density
//! that feeds the speed model.

use std::fmt;

use crate::params::SegmentGeometry;

/// Which corridor area a snapshot field or record refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaKind {
    Screening,
    Segment1,
    Segment2,
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AreaKind::Screening => "screening",
            AreaKind::Segment1 => "segment1",
            AreaKind::Segment2 => "segment2",
        };
        f.write_str(s)
    }
}

// ── Screening zone ────────────────────────────────────────────────────────────

/// The inspection station: a belt with a hard slot capacity.
///
/// Invariant: `0 <= occupied <= capacity` at every tick boundary.  The only
/// mutators are [`try_admit`][crate::try_admit] and [`release`][Self::release],
/// both of which preserve it.
#[derive(Clone, Debug)]
pub struct ScreeningZone {
    capacity: u32,
    occupied: u32,
}

impl ScreeningZone {
    pub fn new(capacity: u32) -> Self {
        Self { capacity, occupied: 0 }
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    #[inline]
    pub fn has_free_slot(&self) -> bool {
        self.occupied < self.capacity
    }

    /// Claim one slot.  Callers go through [`try_admit`][crate::try_admit];
    /// this is crate-visible so the admission decision stays in one place.
    #[inline]
    pub(crate) fn occupy(&mut self) {
        debug_assert!(self.occupied < self.capacity);
        self.occupied += 1;
    }

    /// Free one slot when a passenger's service completes.
    ///
    /// # Panics
    /// Panics in debug mode if the zone is already empty.
    #[inline]
    pub fn release(&mut self) {
        debug_assert!(self.occupied > 0);
        self.occupied -= 1;
    }
}

// ── Walking segment ───────────────────────────────────────────────────────────

/// A density-sensitive corridor segment downstream of screening.
///
/// No hard occupancy cap: congestion manifests purely through the
/// density → speed feedback.  Density is unbounded above; the speed model's
/// floor keeps the system well-defined anyway.
#[derive(Clone, Debug)]
pub struct WalkingSegment {
    geometry: SegmentGeometry,
    occupied: u32,
}

impl WalkingSegment {
    pub fn new(geometry: SegmentGeometry) -> Self {
        Self { geometry, occupied: 0 }
    }

    #[inline]
    pub fn geometry(&self) -> &SegmentGeometry {
        &self.geometry
    }

    #[inline]
    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    /// Occupants per square metre of footprint.
    #[inline]
    pub fn density(&self) -> f64 {
        self.occupied as f64 / self.geometry.area_m2()
    }

    /// Segments admit unconditionally.
    #[inline]
    pub fn enter(&mut self) {
        self.occupied += 1;
    }

    /// # Panics
    /// Panics in debug mode if the segment is already empty.
    #[inline]
    pub fn leave(&mut self) {
        debug_assert!(self.occupied > 0);
        self.occupied -= 1;
    }
}
