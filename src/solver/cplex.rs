//! Backend driving the CPLEX interactive optimizer as a child process.
//!
//! The model is expected at `<workdir>/<run stem>.lp`, written beforehand by
//! the model builder. CPLEX is fed a command script on stdin, writes its own
//! log to `logfilename` and its solution to `<workdir>/<run stem>.sol`; a short
//! summary of the run is then written to `resultfilename`.
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use super::Solver;
use crate::core::params::RuntimeParams;
use crate::core::problem::Problem;
use crate::error::{Error, Result};
use crate::types::float_label;

#[derive(Debug, Clone, Copy, Default)]
pub struct CplexSolver;

/// What could be recovered from the optimizer's console output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveSummary {
    pub status: Option<String>,
    pub objective: Option<f64>,
}

impl SolveSummary {
    /// Scan console output for the final status line, e.g.
    /// `MIP - Integer optimal solution:  Objective =  1.2300000000e+02`.
    pub fn parse(stdout: &str) -> Self {
        let mut summary = SolveSummary::default();
        for line in stdout.lines().map(str::trim) {
            if let Some((status, value)) = line.split_once("Objective =") {
                summary.status = Some(status.trim().trim_end_matches(':').trim().to_string());
                summary.objective = value.trim().parse().ok();
            } else if line.starts_with("MIP - ") {
                summary.status = Some(line.trim_end_matches('.').to_string());
                summary.objective = None;
            }
        }
        summary
    }
}

impl CplexSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn model_path(problem: &Problem, params: &RuntimeParams) -> PathBuf {
        params.work_dir.join(format!("{}.lp", problem.run_stem()))
    }

    pub fn solution_path(problem: &Problem, params: &RuntimeParams) -> PathBuf {
        params.work_dir.join(format!("{}.sol", problem.run_stem()))
    }

    /// Commands for the interactive optimizer, one per line.
    ///
    /// The interactive reader splits arguments on whitespace and has no
    /// quoting, so any path containing whitespace is refused.
    pub fn command_script(
        params: &RuntimeParams,
        model: &Path,
        solution: &Path,
    ) -> Result<String> {
        Ok(format!(
            "set logfile {log}\n\
             set timelimit {time_limit}\n\
             set randomseed {seed}\n\
             set workmem {work_mem}\n\
             set workdir {work_dir}\n\
             read {model}\n\
             optimize\n\
             write {solution} sol\n\
             quit\n",
            log = script_path(&params.log_file_name)?,
            time_limit = params.time_limit,
            seed = params.random_seed,
            work_mem = params.work_mem,
            work_dir = script_path(&params.work_dir)?,
            model = script_path(model)?,
            solution = script_path(solution)?,
        ))
    }

    /// Text written to `resultfilename` once the solver has finished.
    pub fn render_result(
        problem: &Problem,
        params: &RuntimeParams,
        solution: &Path,
        summary: &SolveSummary,
    ) -> String {
        let p = problem.primary();
        let pareto = match problem {
            Problem::Pareto(pareto) => format!(
                "secondary: {}\nsconstrval: {}\n",
                pareto.secondary,
                float_label(pareto.sconstrval)
            ),
            Problem::Standard(_) => String::new(),
        };
        let objective_value = summary
            .objective
            .map_or_else(|| "none".to_string(), |v| v.to_string());

        format!(
            "timestamp: {}\n\
             landscape: {}\n\
             objective: {}\n\
             budget: {}\n\
             hrprop: {}\n\
             method: {}\n\
             {pareto}\
             status: {}\n\
             objective_value: {objective_value}\n\
             solution: {}\n\
             log: {}\n",
            chrono::Local::now().to_rfc3339(),
            p.landscape,
            p.objective,
            float_label(p.budget),
            float_label(p.hrprop),
            p.method,
            summary.status.as_deref().unwrap_or("unknown"),
            solution.display(),
            params.log_file_name.display(),
        )
    }
}

fn script_path(path: &Path) -> Result<String> {
    let text = path.display().to_string();
    if text.chars().any(char::is_whitespace) {
        return Err(Error::UnquotablePath(path.to_path_buf()));
    }
    Ok(text)
}

impl Solver for CplexSolver {
    fn run_cplex(&self, problem: &Problem, params: &RuntimeParams) -> Result<()> {
        fs::create_dir_all(&params.log_file_dir)?;
        fs::create_dir_all(&params.work_dir)?;
        if let Some(parent) = params.result_file_name.parent() {
            fs::create_dir_all(parent)?;
        }

        let model = Self::model_path(problem, params);
        if !model.is_file() {
            return Err(Error::MissingModel(model));
        }
        let solution = Self::solution_path(problem, params);
        let script = Self::command_script(params, &model, &solution)?;

        info!("Launching {:?} on {:?}", params.cplex_path, model);
        debug!("CPLEX command script:\n{}", script);

        let mut child = Command::new(&params.cplex_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                path: params.cplex_path.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A solver that quits early closes its stdin; its exit status says why.
            if let Err(e) = stdin.write_all(script.as_bytes()) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
                warn!("Solver closed stdin before reading the full command script");
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Solver {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let summary = SolveSummary::parse(&String::from_utf8_lossy(&output.stdout));
        match (&summary.status, summary.objective) {
            (Some(status), Some(value)) => info!("{}: objective = {}", status, value),
            (Some(status), None) => warn!("{}", status),
            (None, _) => warn!("No solution status found in solver output"),
        }

        fs::write(
            &params.result_file_name,
            Self::render_result(problem, params, &solution, &summary),
        )?;
        info!("Result written to {:?}", params.result_file_name);
        Ok(())
    }
}
