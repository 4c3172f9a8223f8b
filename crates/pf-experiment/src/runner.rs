//! Sweep execution.
//!
//! Each group gets its own independent engine; groups run in parallel with
//! rayon while every individual run stays single-threaded and
//! deterministic.  Results come back in input order regardless of which
//! group finished first.

use std::path::Path;

use rayon::prelude::*;

use pf_core::GroupId;
use pf_metrics::{MetricsAggregator, RunSummary};
use pf_model::CorridorParams;
use pf_output::{CsvWriter, OutputObserver};
use pf_sim::{EngineBuilder, ObserverPair, RunReport, SimParams};

use crate::error::ExperimentResult;
use crate::group::ExperimentGroup;

/// Outcome of one group's run.
#[derive(Clone, Debug)]
pub struct GroupResult {
    pub id: GroupId,
    pub label: String,
    pub report: RunReport,
    pub summary: RunSummary,
}

/// Run one group to completion and summarize it.
pub fn run_group(
    group: &ExperimentGroup,
    corridor: &CorridorParams,
    sim: &SimParams,
) -> ExperimentResult<GroupResult> {
    let mut engine = EngineBuilder::new(group.arrivals.clone())
        .corridor(corridor.clone())
        .sim_params(sim.clone())
        .build()?;

    let mut metrics = MetricsAggregator::new();
    let report = engine.run(&mut metrics);

    Ok(GroupResult {
        id: group.id,
        label: group.label.clone(),
        report,
        summary: metrics.summary(),
    })
}

/// Run every group against the same corridor, in parallel across groups.
///
/// The first group that fails aborts the sweep; partial results are
/// discarded.
pub fn run_sweep(
    groups: &[ExperimentGroup],
    corridor: &CorridorParams,
    sim: &SimParams,
) -> ExperimentResult<Vec<GroupResult>> {
    groups
        .par_iter()
        .map(|group| run_group(group, corridor, sim))
        .collect()
}

/// Like [`run_sweep`], but each group also writes its full CSV output to
/// `out_root/<label>/`.
pub fn run_sweep_with_output(
    groups: &[ExperimentGroup],
    corridor: &CorridorParams,
    sim: &SimParams,
    out_root: &Path,
) -> ExperimentResult<Vec<GroupResult>> {
    groups
        .par_iter()
        .map(|group| {
            let dir = out_root.join(&group.label);
            std::fs::create_dir_all(&dir)?;

            let mut engine = EngineBuilder::new(group.arrivals.clone())
                .corridor(corridor.clone())
                .sim_params(sim.clone())
                .build()?;

            let mut metrics = MetricsAggregator::new();
            let mut output = OutputObserver::new(CsvWriter::new(&dir)?);
            let report = engine.run(&mut ObserverPair::new(&mut metrics, &mut output));
            if let Some(e) = output.take_error() {
                return Err(e.into());
            }

            Ok(GroupResult {
                id: group.id,
                label: group.label.clone(),
                report,
                summary: metrics.summary(),
            })
        })
        .collect()
}
