//! Corridor geometry and physical constants.
//!
//! One `CorridorParams` value is constructed per run and passed by reference
//! into the engine and the speed model — there is no ambient global
//! configuration.  Defaults reproduce the reference metro-checkpoint layout.

use crate::error::{ModelError, ModelResult};
use crate::speed::SpeedParams;

// ── Segment geometry ──────────────────────────────────────────────────────────

/// Physical dimensions of one walking segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentGeometry {
    /// Walking distance through the segment (m).
    pub length_m: f64,
    /// Usable width (m).
    pub width_m: f64,
}

impl SegmentGeometry {
    pub fn new(length_m: f64, width_m: f64) -> Self {
        Self { length_m, width_m }
    }

    /// Footprint area (m²) used for density computation.
    #[inline]
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

// ── Corridor parameters ───────────────────────────────────────────────────────

/// All physical constants of the checkpoint corridor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorridorParams {
    /// Length of the screening belt (m).
    pub belt_length_m: f64,
    /// Thickness of the carried object on the belt (m).  The object, not
    /// the human body, is the narrowest constraint in the zone, so it is
    /// what bounds packing density — and therefore capacity.
    pub object_thickness_m: f64,
    /// Fixed per-passenger screening service time (s).
    pub service_time_secs: f64,
    /// First walking segment, immediately downstream of screening.
    pub segment1: SegmentGeometry,
    /// Second walking segment, between segment 1 and the corridor exit.
    pub segment2: SegmentGeometry,
    /// Density-speed relation shared by both walking segments.
    pub speed: SpeedParams,
}

impl Default for CorridorParams {
    /// Reference layout: 2.3 m belt, 0.15 m object thickness (capacity 15),
    /// 15.5 s service (place + scan + retrieve), and the two downstream
    /// segments of the published corridor.
    fn default() -> Self {
        Self {
            belt_length_m: 2.3,
            object_thickness_m: 0.15,
            service_time_secs: 15.5,
            segment1: SegmentGeometry::new(4.55, 2.24),
            segment2: SegmentGeometry::new(3.65, 5.97),
            speed: SpeedParams::default(),
        }
    }
}

impl CorridorParams {
    /// Screening-zone capacity: `floor(belt_length / object_thickness)`.
    ///
    /// Computed once at setup; e.g. 2.3 m / 0.15 m ⇒ 15 slots.
    #[inline]
    pub fn screening_capacity(&self) -> u32 {
        (self.belt_length_m / self.object_thickness_m).floor() as u32
    }

    /// Fail fast on any physically meaningless constant.
    ///
    /// Called by the engine builder before a run starts; after this returns
    /// `Ok`, no model computation can fail at runtime.
    pub fn validate(&self) -> ModelResult<()> {
        fn positive(name: &'static str, value: f64) -> ModelResult<()> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ModelError::NonPositiveParam { name, value })
            }
        }

        positive("belt_length_m", self.belt_length_m)?;
        positive("object_thickness_m", self.object_thickness_m)?;
        positive("service_time_secs", self.service_time_secs)?;
        positive("segment1.length_m", self.segment1.length_m)?;
        positive("segment1.width_m", self.segment1.width_m)?;
        positive("segment2.length_m", self.segment2.length_m)?;
        positive("segment2.width_m", self.segment2.width_m)?;
        positive("speed.free_flow", self.speed.free_flow)?;
        positive("speed.k_init", self.speed.k_init)?;
        positive("speed.min_speed", self.speed.min_speed)?;

        if self.screening_capacity() == 0 {
            return Err(ModelError::ZeroCapacity {
                belt_m: self.belt_length_m,
                thickness_m: self.object_thickness_m,
            });
        }
        Ok(())
    }
}
