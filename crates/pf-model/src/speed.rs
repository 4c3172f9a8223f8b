//! Density-dependent walking speed.
//!
//! # Design
//!
//! The model is a pure function of one scalar: pedestrians per square metre
//! in, metres per second out.  Below the free-flow threshold `k_init` the
//! speed is constant; above it a cubic polynomial in `x = density - k_init`
//! describes degradation under crowding.
//!
//! The cubic was fit to empirical crowd-flow data and is not trustworthy at
//! extreme densities — far past the fitted range it can turn upward again or
//! dip toward zero.  A strictly positive `min_speed` floor keeps transit
//! times finite.  The floor is a tunable safety parameter, not a physical
//! constant: its value materially changes congestion outcomes at extreme
//! density, so it is part of [`SpeedParams`] rather than hidden in the code.

/// Parameters of the piecewise density-speed relation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedParams {
    /// Free-flow walking speed (m/s), attained at or below `k_init`.
    pub free_flow: f64,
    /// Density threshold (ped/m²) below which flow is unconstrained.
    pub k_init: f64,
    /// Cubic coefficients `[c3, c2, c1, c0]` applied to `x = density - k_init`.
    pub coeffs: [f64; 4],
    /// Lower clamp on the returned speed (m/s).  Must be strictly positive.
    pub min_speed: f64,
}

impl Default for SpeedParams {
    /// Coefficients from the reference crowd-flow fit:
    /// `v = 0.11x³ − 0.53x² + 0.15x + 1.61`, free flow 1.61 m/s at
    /// densities up to 0.31 ped/m², floored at 0.01 m/s.
    fn default() -> Self {
        Self {
            free_flow: 1.61,
            k_init: 0.31,
            coeffs: [0.11, -0.53, 0.15, 1.61],
            min_speed: 0.01,
        }
    }
}

/// The density → speed mapping used by both walking segments.
///
/// Stateless and side-effect free; the engine calls it once per segment per
/// passenger entry.
#[derive(Clone, Debug)]
pub struct SpeedModel {
    params: SpeedParams,
}

impl SpeedModel {
    pub fn new(params: SpeedParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SpeedParams {
        &self.params
    }

    /// Walking speed (m/s) at `density` (ped/m²).
    ///
    /// Exactly `free_flow` for `density <= k_init`; otherwise the cubic,
    /// clamped to `min_speed` from below.  Always strictly positive for any
    /// finite non-negative density.
    pub fn speed(&self, density: f64) -> f64 {
        let p = &self.params;
        if density <= p.k_init {
            return p.free_flow;
        }
        let x = density - p.k_init;
        let [c3, c2, c1, c0] = p.coeffs;
        let v = ((c3 * x + c2) * x + c1) * x + c0;
        v.max(p.min_speed)
    }
}
