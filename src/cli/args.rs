use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use scropt::RawRequest;

/// Flags that batch scripts pass in single-dash form (`-objective rd`).
const LONG_FLAGS: &[&str] = &[
    "objective",
    "budget",
    "hrprop",
    "landscape",
    "method",
    "secondary",
    "sconstrval",
    "config",
    "dry-run",
    "log",
];

#[derive(Parser, Debug)]
#[command(
    name = "scropt",
    version,
    about = "Run home range optimization for given parameters."
)]
pub struct CliArgs {
    /// Objective for home range optimization problem (rd, pc or dwc)
    #[arg(long)]
    pub objective: String,

    /// Budget for purchasing pixels
    #[arg(long, allow_negative_numbers = true)]
    pub budget: f64,

    /// Minimum proportion of the 95% home range that must be conserved (<= 1)
    #[arg(long, allow_negative_numbers = true)]
    pub hrprop: f64,

    /// Which landscape surface to use for the problem
    #[arg(long)]
    pub landscape: String,

    /// Which method to use to solve the problem (only cplex)
    #[arg(long)]
    pub method: String,

    /// Secondary objective function for pareto frontier experiment constraint
    #[arg(long)]
    pub secondary: Option<String>,

    /// Minimum value for secondary objective in pareto frontier experiment
    #[arg(long, allow_negative_numbers = true)]
    pub sconstrval: Option<f64>,

    /// Solver configuration file (.toml or .json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Validate and print the runtime parameters without solving
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Parse process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn to_request(&self) -> RawRequest {
        RawRequest {
            objective: self.objective.clone(),
            budget: self.budget,
            hrprop: self.hrprop,
            landscape: self.landscape.clone(),
            method: self.method.clone(),
            secondary: self.secondary.clone(),
            sconstrval: self.sconstrval,
        }
    }
}

/// Rewrite `-name` and `-name=value` into `--name` forms for known flags.
/// Anything else, negative numbers included, passes through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{s}"))
            } else {
                arg
            }
        })
        .collect()
}
