//! Fluent builder for constructing an [`Engine`].

use std::collections::VecDeque;

use pf_core::SimClock;
use pf_model::{CorridorParams, ScreeningZone, SpeedModel, WalkingSegment};

use crate::arrivals::{ArrivalGenerator, ArrivalSpec};
use crate::due_queue::DueQueue;
use crate::engine::{Engine, SimParams};
use crate::error::{SimError, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Required inputs
///
/// - [`ArrivalSpec`] — per-class rates and the arrival pattern.
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                     |
/// |-----------------|-----------------------------|
/// | `.corridor(p)`  | `CorridorParams::default()` |
/// | `.sim_params(s)`| 0.1 s ticks, 20,000-tick budget |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(ArrivalSpec::continuous(1.0, 5.0, 60.0))
///     .build()?;
/// let report = engine.run(&mut NoopObserver);
/// ```
pub struct EngineBuilder {
    arrivals: ArrivalSpec,
    corridor: Option<CorridorParams>,
    sim: Option<SimParams>,
}

impl EngineBuilder {
    /// Create a builder with all required inputs.
    pub fn new(arrivals: ArrivalSpec) -> Self {
        Self {
            arrivals,
            corridor: None,
            sim: None,
        }
    }

    /// Supply corridor constants other than the reference layout.
    pub fn corridor(mut self, corridor: CorridorParams) -> Self {
        self.corridor = Some(corridor);
        self
    }

    /// Supply a tick length / tick budget other than the defaults.
    pub fn sim_params(mut self, sim: SimParams) -> Self {
        self.sim = Some(sim);
        self
    }

    /// Validate every input, derive the screening capacity, and return a
    /// ready-to-run [`Engine`].
    ///
    /// This is the single fail-fast point: after `build` returns `Ok`,
    /// nothing in the tick loop can fail.
    pub fn build(self) -> SimResult<Engine> {
        let corridor = self.corridor.unwrap_or_default();
        let sim = self.sim.unwrap_or_default();

        corridor.validate()?;
        self.arrivals.validate()?;

        if !(sim.tick_len_secs > 0.0 && sim.tick_len_secs.is_finite()) {
            return Err(SimError::Config(format!(
                "tick_len_secs must be positive, got {}",
                sim.tick_len_secs
            )));
        }
        if sim.max_ticks == 0 {
            return Err(SimError::Config("max_ticks must be non-zero".into()));
        }

        let screening = ScreeningZone::new(corridor.screening_capacity());
        let segment1 = WalkingSegment::new(corridor.segment1);
        let segment2 = WalkingSegment::new(corridor.segment2);
        let speed = SpeedModel::new(corridor.speed.clone());
        let arrivals = ArrivalGenerator::new(self.arrivals, sim.tick_len_secs);
        let clock = SimClock::new(sim.tick_len_secs);

        Ok(Engine {
            corridor,
            sim,
            clock,
            speed,
            arrivals,
            queue: VecDeque::new(),
            screening,
            segment1,
            segment2,
            due: DueQueue::new(),
            passengers: Vec::new(),
            departed: 0,
        })
    }
}
