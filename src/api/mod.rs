//! High-level library API: validate a raw request, derive its problem and
//! runtime parameters, and hand them to a solver backend. Prefer these
//! entrypoints over the `core` modules when embedding SCROPT.
use serde::Serialize;
use tracing::info;

use crate::core::params::{RuntimeParams, SolverConfig};
use crate::core::problem::Problem;
use crate::core::request::{RawRequest, RunRequest};
use crate::error::Result;
use crate::solver::Solver;

/// A validated run, ready to be dispatched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRun {
    pub problem: Problem,
    pub params: RuntimeParams,
}

impl PreparedRun {
    /// Check the runtime parameters once more and delegate to `solver`.
    pub fn execute<S: Solver + ?Sized>(&self, solver: &S) -> Result<()> {
        self.params.ensure_complete()?;
        self.problem.run_cplex(solver, &self.params)
    }
}

/// Validate `raw` and build everything a solver needs. Nothing is written.
pub fn prepare(raw: RawRequest, config: &SolverConfig) -> Result<PreparedRun> {
    let request = RunRequest::try_from(raw)?;
    let problem = Problem::from_request(&request);
    info!("Arguments parsed: {}", problem);

    let params = RuntimeParams::build(config, &problem);
    Ok(PreparedRun { problem, params })
}

/// Validate, build and solve in one go.
pub fn run<S: Solver + ?Sized>(raw: RawRequest, config: &SolverConfig, solver: &S) -> Result<()> {
    prepare(raw, config)?.execute(solver)
}
