//! `pf-experiment` — experiment groups and the parameter-sweep runner.
//!
//! An *experiment group* is one named arrival configuration; a *sweep* runs
//! a list of groups against the same corridor, one independent engine per
//! group, in parallel across groups.  Each run is single-threaded and
//! deterministic, so a sweep's results depend only on its inputs.
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`group`]  | `ExperimentGroup`, the reference ten-group sweep    |
//! | [`loader`] | CSV sweep loader                                    |
//! | [`runner`] | `run_group`, `run_sweep`, per-group CSV output      |
//! | [`error`]  | `ExperimentError`                                   |

pub mod error;
pub mod group;
pub mod loader;
pub mod runner;


pub use error::{ExperimentError, ExperimentResult};
pub use group::{ExperimentGroup, default_groups};
pub use loader::{load_groups_csv, load_groups_reader};
pub use runner::{GroupResult, run_group, run_sweep, run_sweep_with_output};
