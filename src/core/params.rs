use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::problem::Problem;
use crate::error::{Error, Result};

/// Keys every runtime parameter set must carry before it is handed to a solver.
pub const REQUIRED_KEYS: [&str; 8] = [
    "cplexpath",
    "timelimit",
    "randomseed",
    "workmem",
    "logfiledir",
    "logfilename",
    "resultfilename",
    "workdir",
];

/// Environment-specific solver settings, suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// CPLEX interactive executable
    pub cplex_path: PathBuf,
    /// Seconds
    pub time_limit: u64,
    pub random_seed: u64,
    /// Megabytes of working memory before CPLEX spills node files to disk
    pub work_mem: u64,
    pub log_dir: PathBuf,
    /// Results land in `budget/` or `pareto/` below this directory
    pub result_dir: PathBuf,
    /// Model (`.lp`) and solution (`.sol`) files
    pub work_dir: PathBuf,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cplex_path: PathBuf::from("/opt/ibm/ILOG/CPLEX_Studio126/cplex/bin/x86-64_linux/cplex"),
            time_limit: 432_000,
            random_seed: 15,
            work_mem: 20_000,
            log_dir: PathBuf::from("output/logfiles"),
            result_dir: PathBuf::from("output/results"),
            work_dir: PathBuf::from("output/lpandsolfiles"),
        }
    }
}

/// Solver-facing parameters for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeParams {
    #[serde(rename = "cplexpath")]
    pub cplex_path: PathBuf,
    #[serde(rename = "timelimit")]
    pub time_limit: u64,
    #[serde(rename = "randomseed")]
    pub random_seed: u64,
    #[serde(rename = "workmem")]
    pub work_mem: u64,
    #[serde(rename = "logfiledir")]
    pub log_file_dir: PathBuf,
    #[serde(rename = "logfilename")]
    pub log_file_name: PathBuf,
    #[serde(rename = "resultfilename")]
    pub result_file_name: PathBuf,
    #[serde(rename = "workdir")]
    pub work_dir: PathBuf,
}

impl RuntimeParams {
    pub fn build(config: &SolverConfig, problem: &Problem) -> Self {
        Self {
            cplex_path: config.cplex_path.clone(),
            time_limit: config.time_limit,
            random_seed: config.random_seed,
            work_mem: config.work_mem,
            log_file_dir: config.log_dir.clone(),
            log_file_name: config.log_dir.join(format!("{}.log", problem.run_stem())),
            result_file_name: config
                .result_dir
                .join(problem.result_subdir())
                .join(format!("{}.txt", problem.result_stem())),
            work_dir: config.work_dir.clone(),
        }
    }

    pub fn to_map(&self) -> Result<BTreeMap<String, serde_json::Value>> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(Error::config(
                "runtimeparams",
                format!("expected an object, got {other}"),
            )),
        }
    }

    /// Refuse to dispatch unless every required key is present and non-empty.
    pub fn ensure_complete(&self) -> Result<()> {
        check_required_keys(&self.to_map()?)
    }
}

pub fn check_required_keys(map: &BTreeMap<String, serde_json::Value>) -> Result<()> {
    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| match map.get(**key) {
            None | Some(serde_json::Value::Null) => true,
            Some(serde_json::Value::String(s)) => s.is_empty(),
            Some(_) => false,
        })
        .map(|key| key.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingRuntimeParams { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::{RunKind, RunRequest};
    use crate::types::{Objective, SolveMethod};

    fn problem(kind: RunKind) -> Problem {
        Problem::from_request(&RunRequest {
            objective: Objective::Rd,
            budget: 200.0,
            hrprop: 0.8,
            landscape: "surfaceA".to_string(),
            method: SolveMethod::Cplex,
            kind,
        })
    }

    #[test]
    fn standard_params_have_exactly_the_required_keys() {
        let params = RuntimeParams::build(&SolverConfig::default(), &problem(RunKind::Standard));
        let map = params.to_map().unwrap();
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        let mut expected = REQUIRED_KEYS.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
        assert!(params.ensure_complete().is_ok());
        assert_eq!(map["timelimit"], 432_000u64);
        assert_eq!(map["randomseed"], 15u64);
        assert_eq!(map["workmem"], 20_000u64);
    }

    #[test]
    fn standard_paths() {
        let params = RuntimeParams::build(&SolverConfig::default(), &problem(RunKind::Standard));
        assert_eq!(
            params.log_file_name,
            PathBuf::from("output/logfiles/surfaceA_rd_200.0.log")
        );
        assert_eq!(
            params.result_file_name,
            PathBuf::from("output/results/budget/surfaceA_rd_200.0.txt")
        );
        assert_eq!(params.work_dir, PathBuf::from("output/lpandsolfiles"));
    }

    #[test]
    fn pareto_paths_embed_secondary_and_constraint() {
        let config = SolverConfig::default();
        let standard = RuntimeParams::build(&config, &problem(RunKind::Standard));
        let pareto = RuntimeParams::build(
            &config,
            &problem(RunKind::Pareto {
                secondary: Objective::Pc,
                sconstrval: 50.0,
            }),
        );
        assert_ne!(standard.result_file_name, pareto.result_file_name);
        assert_ne!(standard.log_file_name, pareto.log_file_name);
        assert_eq!(
            pareto.log_file_name,
            PathBuf::from("output/logfiles/surfaceA_rd_200.0_pareto_pc_50.0.log")
        );
        assert_eq!(
            pareto.result_file_name,
            PathBuf::from("output/results/pareto/surfaceA_rd_200.0_pc_50.0.txt")
        );
        assert_eq!(standard.work_dir, pareto.work_dir);
    }

    #[test]
    fn config_directories_are_injected() {
        let config = SolverConfig {
            log_dir: PathBuf::from("/scratch/logs"),
            result_dir: PathBuf::from("/scratch/results"),
            work_dir: PathBuf::from("/scratch/work"),
            cplex_path: PathBuf::from("/usr/local/bin/cplex"),
            ..SolverConfig::default()
        };
        let params = RuntimeParams::build(&config, &problem(RunKind::Standard));
        assert_eq!(params.cplex_path, PathBuf::from("/usr/local/bin/cplex"));
        assert_eq!(params.log_file_dir, PathBuf::from("/scratch/logs"));
        assert!(params.result_file_name.starts_with("/scratch/results/budget"));
    }

    #[test]
    fn partial_map_is_rejected() {
        let params = RuntimeParams::build(&SolverConfig::default(), &problem(RunKind::Standard));
        let mut map = params.to_map().unwrap();
        map.remove("workmem");
        map.insert("workdir".to_string(), serde_json::Value::String(String::new()));
        match check_required_keys(&map) {
            Err(Error::MissingRuntimeParams { missing }) => {
                assert_eq!(missing, vec!["workmem".to_string(), "workdir".to_string()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_solver_path_fails_completeness() {
        let config = SolverConfig {
            cplex_path: PathBuf::new(),
            ..SolverConfig::default()
        };
        let params = RuntimeParams::build(&config, &problem(RunKind::Standard));
        assert!(matches!(
            params.ensure_complete(),
            Err(Error::MissingRuntimeParams { .. })
        ));
    }
}
