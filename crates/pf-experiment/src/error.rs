//! Error types for pf-experiment.

use thiserror::Error;

/// Errors from loading or running a sweep.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sweep CSV parse error: {0}")]
    Parse(String),

    #[error("simulation error: {0}")]
    Sim(#[from] pf_sim::SimError),

    #[error("output error: {0}")]
    Output(#[from] pf_output::OutputError),
}

/// Alias for `Result<T, ExperimentError>`.
pub type ExperimentResult<T> = Result<T, ExperimentError>;
