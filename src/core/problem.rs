//! Problem descriptions handed to the solver backend. The model itself is
//! built elsewhere; a `Problem` only carries the parameters that select it and
//! the names its artifacts are filed under.
use serde::Serialize;

use crate::core::request::{RunKind, RunRequest};
use crate::types::{Objective, SolveMethod, float_label};

/// Single-objective problem: maximize `objective` within `budget`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardProblem {
    pub objective: Objective,
    pub budget: f64,
    pub hrprop: f64,
    pub landscape: String,
    pub method: SolveMethod,
}

/// Dual-objective problem used to trace pareto frontiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoProblem {
    #[serde(flatten)]
    pub primary: StandardProblem,
    pub secondary: Objective,
    pub sconstrval: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Problem {
    Standard(StandardProblem),
    Pareto(ParetoProblem),
}

impl Problem {
    pub fn from_request(request: &RunRequest) -> Self {
        let primary = StandardProblem {
            objective: request.objective,
            budget: request.budget,
            hrprop: request.hrprop,
            landscape: request.landscape.clone(),
            method: request.method,
        };
        match request.kind {
            RunKind::Standard => Problem::Standard(primary),
            RunKind::Pareto {
                secondary,
                sconstrval,
            } => Problem::Pareto(ParetoProblem {
                primary,
                secondary,
                sconstrval,
            }),
        }
    }

    pub fn primary(&self) -> &StandardProblem {
        match self {
            Problem::Standard(p) => p,
            Problem::Pareto(p) => &p.primary,
        }
    }

    pub fn is_pareto(&self) -> bool {
        matches!(self, Problem::Pareto(_))
    }

    /// `<landscape>_<objective>_<budget>`, shared by every artifact of the run.
    fn base_name(&self) -> String {
        let p = self.primary();
        format!("{}_{}_{}", p.landscape, p.objective, float_label(p.budget))
    }

    /// Stem for the solver log, model and solution files.
    pub fn run_stem(&self) -> String {
        match self {
            Problem::Standard(_) => self.base_name(),
            Problem::Pareto(p) => format!(
                "{}_pareto_{}_{}",
                self.base_name(),
                p.secondary,
                float_label(p.sconstrval)
            ),
        }
    }

    /// Stem for the result file. Pareto results already sit under `pareto/`
    /// so the marker is left out of the name.
    pub fn result_stem(&self) -> String {
        match self {
            Problem::Standard(_) => self.base_name(),
            Problem::Pareto(p) => format!(
                "{}_{}_{}",
                self.base_name(),
                p.secondary,
                float_label(p.sconstrval)
            ),
        }
    }

    pub fn result_subdir(&self) -> &'static str {
        match self {
            Problem::Standard(_) => "budget",
            Problem::Pareto(_) => "pareto",
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.primary();
        write!(
            f,
            "objective={}, budget={}, hrprop={}, landscape={}, method={}",
            p.objective,
            float_label(p.budget),
            float_label(p.hrprop),
            p.landscape,
            p.method
        )?;
        if let Problem::Pareto(pp) = self {
            write!(
                f,
                ", secondary={}, sconstrval={}",
                pp.secondary,
                float_label(pp.sconstrval)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: RunKind) -> RunRequest {
        RunRequest {
            objective: Objective::Rd,
            budget: 200.0,
            hrprop: 0.8,
            landscape: "surfaceA".to_string(),
            method: SolveMethod::Cplex,
            kind,
        }
    }

    #[test]
    fn standard_names() {
        let problem = Problem::from_request(&request(RunKind::Standard));
        assert!(!problem.is_pareto());
        assert_eq!(problem.run_stem(), "surfaceA_rd_200.0");
        assert_eq!(problem.result_stem(), "surfaceA_rd_200.0");
        assert_eq!(problem.result_subdir(), "budget");
    }

    #[test]
    fn pareto_names() {
        let problem = Problem::from_request(&request(RunKind::Pareto {
            secondary: Objective::Pc,
            sconstrval: 50.0,
        }));
        assert!(problem.is_pareto());
        assert_eq!(problem.run_stem(), "surfaceA_rd_200.0_pareto_pc_50.0");
        assert_eq!(problem.result_stem(), "surfaceA_rd_200.0_pc_50.0");
        assert_eq!(problem.result_subdir(), "pareto");
    }

    #[test]
    fn display_lists_pareto_fields() {
        let problem = Problem::from_request(&request(RunKind::Pareto {
            secondary: Objective::Dwc,
            sconstrval: 12.5,
        }));
        let text = problem.to_string();
        assert!(text.starts_with("objective=rd, budget=200"));
        assert!(text.ends_with("secondary=dwc, sconstrval=12.5"));
    }

    #[test]
    fn display_keeps_float_formatting_of_filenames() {
        let problem = Problem::from_request(&RunRequest {
            budget: 500.0,
            hrprop: 1.0,
            ..request(RunKind::Pareto {
                secondary: Objective::Pc,
                sconstrval: 0.00001,
            })
        });
        assert_eq!(
            problem.to_string(),
            "objective=rd, budget=500.0, hrprop=1.0, landscape=surfaceA, method=cplex, \
             secondary=pc, sconstrval=1e-05"
        );
        assert_eq!(problem.run_stem(), "surfaceA_rd_500.0_pareto_pc_1e-05");
    }
}
