#![doc = r#"
SCROPT: home range connectivity optimization driver.

This crate validates the parameters of a landscape connectivity optimization
run (objective, budget, home range proportion, landscape surface, solve
method and an optional secondary objective for pareto experiments), derives
the solver's runtime parameters from them, and hands the resulting problem to
a solver backend. The model formulation itself is produced by an external
model builder; the bundled [`CplexSolver`] drives the CPLEX interactive
optimizer against that model.

Quick start: validate and solve
-------------------------------
```rust,no_run
use scropt::{run, CplexSolver, RawRequest, SolverConfig};

fn main() -> scropt::Result<()> {
    let request = RawRequest {
        objective: "dwc".to_string(),
        budget: 500.0,
        hrprop: 0.95,
        landscape: "lsX".to_string(),
        method: "cplex".to_string(),
        secondary: None,
        sconstrval: None,
    };

    run(request, &SolverConfig::default(), &CplexSolver::new())
}
```

Inspect the runtime parameters without solving
----------------------------------------------
```rust
use scropt::{prepare, RawRequest, SolverConfig};

let request = RawRequest {
    objective: "rd".to_string(),
    budget: 200.0,
    hrprop: 0.8,
    landscape: "surfaceA".to_string(),
    method: "cplex".to_string(),
    secondary: Some("pc".to_string()),
    sconstrval: Some(50.0),
};

let prepared = prepare(request, &SolverConfig::default()).unwrap();
assert!(prepared.problem.is_pareto());
assert!(prepared.params.result_file_name.ends_with("pareto/surfaceA_rd_200.0_pc_50.0.txt"));
```

Error handling
--------------
All public functions return `scropt::Result<T>`. Validation failures are
reported before anything touches the filesystem; `Error::is_validation`
tells them apart from configuration and solver errors.

Useful modules
--------------
- [`api`]: `prepare` / `run` entry points.
- [`core`]: request validation, problem variants, runtime parameters.
- [`solver`]: the `Solver` trait and the CPLEX backend.
- [`io`]: loading `SolverConfig` from TOML or JSON.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod solver;
pub mod types;

// Types
pub use crate::core::params::{REQUIRED_KEYS, RuntimeParams, SolverConfig};
pub use crate::core::problem::{ParetoProblem, Problem, StandardProblem};
pub use crate::core::request::{RawRequest, RunKind, RunRequest};
pub use crate::error::{Error, Result};
pub use crate::types::{Objective, SolveMethod};

// Config
pub use crate::io::load_solver_config;

// Solvers
pub use crate::solver::{CplexSolver, SolveSummary, Solver};

// High-level API
pub use crate::api::{PreparedRun, prepare, run};
