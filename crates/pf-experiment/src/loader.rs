//! CSV sweep loader.
//!
//! # CSV format
//!
//! One row per experiment group.  The gap columns are either both present
//! (discontinuous pattern) or both empty (continuous pattern); anything else
//! is a parse error.
//!
//! ```csv
//! group_id,label,rate_with_luggage,rate_without_luggage,duration_secs,gap_start_secs,gap_end_secs
//! 1,morning-light,1.0,5.0,60.0,,
//! 2,morning-heavy,5.0,1.0,60.0,,
//! 3,pulsed,3.0,3.0,60.0,20.0,40.0
//! ```
//!
//! Every loaded group is validated before the loader returns, so a sweep
//! built from a loaded list cannot fail on arrival configuration later.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pf_core::GroupId;
use pf_sim::{ArrivalPattern, ArrivalSpec};

use crate::ExperimentError;
use crate::group::ExperimentGroup;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GroupRecord {
    group_id: u16,
    label: String,
    rate_with_luggage: f64,
    rate_without_luggage: f64,
    duration_secs: f64,
    gap_start_secs: Option<f64>,
    gap_end_secs: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an experiment-group list from a CSV file.
pub fn load_groups_csv(path: &Path) -> Result<Vec<ExperimentGroup>, ExperimentError> {
    let file = std::fs::File::open(path).map_err(ExperimentError::Io)?;
    load_groups_reader(file)
}

/// Like [`load_groups_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded sweep
/// definitions.
pub fn load_groups_reader<R: Read>(reader: R) -> Result<Vec<ExperimentGroup>, ExperimentError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut groups = Vec::new();

    for result in csv_reader.deserialize::<GroupRecord>() {
        let row = result.map_err(|e| ExperimentError::Parse(e.to_string()))?;

        let pattern = match (row.gap_start_secs, row.gap_end_secs) {
            (None, None) => ArrivalPattern::Continuous {
                duration_secs: row.duration_secs,
            },
            (Some(gap_start_secs), Some(gap_end_secs)) => ArrivalPattern::Discontinuous {
                duration_secs: row.duration_secs,
                gap_start_secs,
                gap_end_secs,
            },
            _ => {
                return Err(ExperimentError::Parse(format!(
                    "group {}: gap_start_secs and gap_end_secs must be both set or both empty",
                    row.group_id
                )));
            }
        };

        let group = ExperimentGroup::new(
            GroupId(row.group_id),
            row.label,
            ArrivalSpec {
                rate_with_luggage: row.rate_with_luggage,
                rate_without_luggage: row.rate_without_luggage,
                pattern,
            },
        );
        group
            .validate()
            .map_err(|e| ExperimentError::Parse(format!("group {}: {e}", row.group_id)))?;
        groups.push(group);
    }

    Ok(groups)
}
