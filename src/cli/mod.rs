//! Command Line Interface (CLI) layer for SCROPT.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): validate the request, build the
//! runtime parameters, and dispatch to the CPLEX backend.
//!
//! If you are embedding SCROPT into another application, prefer using
//! the high-level `scropt::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
