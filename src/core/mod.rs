//! Core building blocks: request validation, problem descriptions, and the
//! runtime parameters derived from them. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod problem;
pub mod request;
