//! `pf-sim` — the pedflow simulation engine.
//!
//! The engine owns the corridor areas, the entrance queue, and the passenger
//! population, and drives them through a single-threaded deterministic tick
//! loop.  Given identical configuration, two runs produce byte-identical
//! snapshot and completion streams: there is no randomness and no
//! wall-clock dependence anywhere in this crate.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`arrivals`]  | `ArrivalSpec`, `ArrivalPattern`, fractional accumulator |
//! | [`passenger`] | `Passenger`, `Stage` state machine                      |
//! | [`due_queue`] | sparse tick → passenger completion schedule             |
//! | [`engine`]    | `Engine`, `SimParams`, the tick procedure               |
//! | [`builder`]   | `EngineBuilder` — validation + assembly                 |
//! | [`observer`]  | `EngineObserver`, `NoopObserver`, `ObserverPair`        |
//! | [`record`]    | `TickSnapshot`, `CompletionRecord`                      |
//! | [`error`]     | `SimError`, `SimResult`                                 |

pub mod arrivals;
pub mod builder;
pub mod due_queue;
pub mod engine;
pub mod error;
pub mod observer;
pub mod passenger;
pub mod record;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrivals::{ArrivalGenerator, ArrivalPattern, ArrivalSpec};
pub use builder::EngineBuilder;
pub use due_queue::DueQueue;
pub use engine::{Engine, RunOutcome, RunReport, SimParams};
pub use error::{SimError, SimResult};
pub use observer::{EngineObserver, NoopObserver, ObserverPair};
pub use passenger::{Passenger, Stage};
pub use record::{CompletionRecord, TickSnapshot};
