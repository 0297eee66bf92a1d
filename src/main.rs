//! SCROPT CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, validate them,
//! dispatch to the solver, and exit with appropriate status.
//! For programmatic use, prefer the library API (`scropt::api`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse_normalized();
    cli::run(args)?;
    Ok(())
}
