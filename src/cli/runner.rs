use tracing::info;
use tracing_subscriber::EnvFilter;

use scropt::solver::Solver;
use scropt::{CplexSolver, SolverConfig, load_solver_config, prepare};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Run against an explicit solver backend. Output for `--dry-run` goes to `out`.
pub fn run_with<S: Solver + ?Sized>(
    args: &CliArgs,
    solver: &S,
    out: &mut dyn std::io::Write,
) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => load_solver_config(path)?,
        None => SolverConfig::default(),
    };

    let prepared = prepare(args.to_request(), &config)?;

    if args.dry_run {
        prepared.params.ensure_complete()?;
        let rendered = serde_json::to_string_pretty(&prepared.params)?;
        writeln!(out, "{rendered}").map_err(scropt::Error::from)?;
        return Ok(());
    }

    info!(
        "Solving {} problem; results go to {:?}",
        if prepared.problem.is_pareto() {
            "pareto"
        } else {
            "standard"
        },
        prepared.params.result_file_name
    );
    prepared.execute(solver)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging()?;
    }

    run_with(&args, &CplexSolver::new(), &mut std::io::stdout())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;

    use clap::Parser;
    use scropt::{Problem, RuntimeParams};
    use tempfile::TempDir;

    use super::*;
    use crate::cli::args::normalize_args;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(Problem, RuntimeParams)>>,
    }

    impl Solver for Recorder {
        fn run_cplex(&self, problem: &Problem, params: &RuntimeParams) -> scropt::Result<()> {
            self.calls
                .borrow_mut()
                .push((problem.clone(), params.clone()));
            Ok(())
        }
    }

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec![
            "scropt",
            "-objective",
            "dwc",
            "-budget",
            "500",
            "-hrprop",
            "0.95",
            "-landscape",
            "lsX",
            "-method",
            "cplex",
        ];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(normalize_args(argv))
    }

    #[test]
    fn dispatches_standard_problem() {
        let recorder = Recorder::default();
        let mut out = Vec::new();
        run_with(&args(&[]), &recorder, &mut out).unwrap();

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (problem, params) = &calls[0];
        assert!(!problem.is_pareto());
        assert!(params.result_file_name.ends_with("lsX_dwc_500.0.txt"));
        assert!(out.is_empty());
    }

    #[test]
    fn dry_run_prints_params_without_solving() {
        let recorder = Recorder::default();
        let mut out = Vec::new();
        run_with(
            &args(&["-secondary", "pc", "-sconstrval", "50", "--dry-run"]),
            &recorder,
            &mut out,
        )
        .unwrap();

        assert!(recorder.calls.borrow().is_empty());
        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let result = printed["resultfilename"].as_str().unwrap();
        assert!(result.ends_with("pareto/lsX_dwc_500.0_pc_50.0.txt"));
        assert_eq!(printed.as_object().unwrap().len(), 8);
    }

    #[test]
    fn validation_error_stops_before_solver() {
        let recorder = Recorder::default();
        let mut out = Vec::new();
        let err = run_with(&args(&["-secondary", "dwc", "-sconstrval", "5"]), &recorder, &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Scropt(scropt::Error::SameObjectives { .. })
        ));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("solver.toml");
        fs::write(
            &config,
            "cplex_path = \"/usr/bin/cplex\"\nresult_dir = \"/data/results\"\n",
        )
        .unwrap();

        let recorder = Recorder::default();
        let mut out = Vec::new();
        run_with(
            &args(&["-config", config.to_str().unwrap()]),
            &recorder,
            &mut out,
        )
        .unwrap();

        let calls = recorder.calls.borrow();
        let (_, params) = &calls[0];
        assert_eq!(params.cplex_path, std::path::PathBuf::from("/usr/bin/cplex"));
        assert_eq!(
            params.result_file_name,
            std::path::PathBuf::from("/data/results/budget/lsX_dwc_500.0.txt")
        );
    }
}
