//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers request validation, runtime parameter completeness, configuration
//! loading, and failures reported by the solver backend.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid optimization objective requested: {value}. Please choose from: rd, pc, dwc.")]
    InvalidObjective { value: String },

    #[error(
        "Invalid secondary optimization objective requested: {value}. Please choose from: rd, pc, dwc."
    )]
    InvalidSecondary { value: String },

    #[error("Primary and secondary optimization objectives should not be the same ({objective}).")]
    SameObjectives { objective: String },

    #[error("Secondary optimization objective requires a constraint value.")]
    MissingConstraintValue,

    #[error("Only hrprop <= 1 has been implemented, got: {hrprop}")]
    HrpropTooLarge { hrprop: f64 },

    #[error("Budget must be a positive number, got: {budget}")]
    InvalidBudget { budget: f64 },

    #[error("Only cplex solve method has been implemented, got: {value}")]
    UnsupportedMethod { value: String },

    #[error("One or more runtimeparams missing: {}", .missing.join(", "))]
    MissingRuntimeParams { missing: Vec<String> },

    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Model file not found: {0}")]
    MissingModel(PathBuf),

    #[error("Path contains whitespace and cannot be passed to the CPLEX command line: {0}")]
    UnquotablePath(PathBuf),

    #[error("Failed to launch solver {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Solver exited with {status}: {stderr}")]
    Solver { status: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Config {
            path: path.into(),
            message: e.to_string(),
        }
    }

    /// True for errors raised while checking user input, before any solve.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidObjective { .. }
                | Error::InvalidSecondary { .. }
                | Error::SameObjectives { .. }
                | Error::MissingConstraintValue
                | Error::HrpropTooLarge { .. }
                | Error::InvalidBudget { .. }
                | Error::UnsupportedMethod { .. }
        )
    }
}
