//! I/O layer: loading solver configuration from disk.
pub mod config;
pub use config::load_solver_config;
