//! `pf-metrics` — streaming metrics collection for pedflow runs.
//!
//! Everything here consumes engine output through the
//! [`EngineObserver`][pf_sim::EngineObserver] hooks; nothing reaches into
//! engine state.  The two observers compose with
//! [`ObserverPair`][pf_sim::ObserverPair] when a run needs both:
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`aggregator`] | `MetricsAggregator` — streaming stats, O(1) memory  |
//! | [`series`]   | `TimeSeries`, `CompletionLog` — retained histories    |
//! | [`summary`]  | `RunSummary`, `ClassSummary`                          |

pub mod aggregator;
pub mod series;
pub mod summary;


pub use aggregator::MetricsAggregator;
pub use series::{CompletionLog, TimeSeries};
pub use summary::{ClassSummary, RunSummary};
