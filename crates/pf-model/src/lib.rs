//! `pf-model` — corridor physics for the pedflow simulator.
//!
//! Everything in this crate is passive state or pure computation: the
//! engine (`pf-sim`) owns the mutation schedule.
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`params`]    | `CorridorParams`, `SegmentGeometry`, validation     |
//! | [`speed`]     | `SpeedModel` — density → walking speed              |
//! | [`area`]      | `ScreeningZone`, `WalkingSegment`, `AreaKind`       |
//! | [`admission`] | capacity-gated screening-zone admission             |
//! | [`error`]     | `ModelError`, `ModelResult`                         |

pub mod admission;
pub mod area;
pub mod error;
pub mod params;
pub mod speed;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use admission::{Admission, try_admit};
pub use area::{AreaKind, ScreeningZone, WalkingSegment};
pub use error::{ModelError, ModelResult};
pub use params::{CorridorParams, SegmentGeometry};
pub use speed::{SpeedModel, SpeedParams};
