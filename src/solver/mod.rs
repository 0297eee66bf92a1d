//! Solver backends. A backend receives a fully validated `Problem` together
//! with its `RuntimeParams` and owns everything from there on: file I/O,
//! launching the solver, and persisting results.
pub mod cplex;

pub use cplex::{CplexSolver, SolveSummary};

use crate::core::params::RuntimeParams;
use crate::core::problem::Problem;
use crate::error::Result;

pub trait Solver {
    /// Solve `problem`. Errors are returned to the caller unchanged.
    fn run_cplex(&self, problem: &Problem, params: &RuntimeParams) -> Result<()>;
}

impl Problem {
    pub fn run_cplex<S: Solver + ?Sized>(&self, solver: &S, params: &RuntimeParams) -> Result<()> {
        solver.run_cplex(self, params)
    }
}
