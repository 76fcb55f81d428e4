//! Configuration loading for the Approval Routing and Compensation Engine.
//!
//! Workflow definitions and work-location GOSI settings are administered
//! outside the engine and loaded from YAML files at startup. Structural
//! invariants are validated here, at the boundary, so the evaluators can
//! assume well-formed input.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, WorkLocationsConfig, WorkflowsConfig};
