use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Objective, SolveMethod};

/// Unvalidated request, exactly as it arrives from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRequest {
    pub objective: String,
    pub budget: f64,
    pub hrprop: f64,
    pub landscape: String,
    pub method: String,
    pub secondary: Option<String>,
    pub sconstrval: Option<f64>,
}

/// Which problem variant a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RunKind {
    Standard,
    /// Primary objective subject to a minimum value on `secondary`.
    Pareto {
        secondary: Objective,
        sconstrval: f64,
    },
}

/// A validated run. Built once from a `RawRequest` and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    pub objective: Objective,
    pub budget: f64,
    pub hrprop: f64,
    pub landscape: String,
    pub method: SolveMethod,
    pub kind: RunKind,
}

impl RunRequest {
    pub fn is_pareto(&self) -> bool {
        matches!(self.kind, RunKind::Pareto { .. })
    }
}

impl TryFrom<RawRequest> for RunRequest {
    type Error = Error;

    fn try_from(raw: RawRequest) -> Result<Self> {
        let objective: Objective = raw.objective.parse()?;

        if raw.hrprop > 1.0 {
            return Err(Error::HrpropTooLarge { hrprop: raw.hrprop });
        }
        if !raw.budget.is_finite() || raw.budget <= 0.0 {
            return Err(Error::InvalidBudget { budget: raw.budget });
        }

        let method: SolveMethod = raw.method.parse()?;

        // An empty secondary is treated the same as an absent one.
        let kind = match raw.secondary.as_deref().filter(|s| !s.is_empty()) {
            None => {
                if raw.sconstrval.is_some() {
                    debug!("Ignoring sconstrval without a secondary objective");
                }
                RunKind::Standard
            }
            Some(secondary) => {
                let secondary = Objective::parse_secondary(secondary)?;
                if secondary == objective {
                    return Err(Error::SameObjectives {
                        objective: objective.to_string(),
                    });
                }
                // Zero counts as missing: a zero floor on the secondary is no constraint.
                let sconstrval = match raw.sconstrval {
                    Some(v) if v != 0.0 && !v.is_nan() => v,
                    _ => return Err(Error::MissingConstraintValue),
                };
                RunKind::Pareto {
                    secondary,
                    sconstrval,
                }
            }
        };

        Ok(RunRequest {
            objective,
            budget: raw.budget,
            hrprop: raw.hrprop,
            landscape: raw.landscape,
            method,
            kind,
        })
    }
}
