//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{ApprovalWorkflow, RequestType, WorkLocation};

use super::types::{EngineConfig, WorkLocationsConfig, WorkflowsConfig};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query workflow definitions and work locations.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── workflows.yaml       # Approval workflow definitions
/// └── work_locations.yaml  # Work locations and GOSI rate tables
/// ```
///
/// # Example
///
/// ```no_run
/// use hrflow_engine::config::ConfigLoader;
/// use hrflow_engine::models::RequestType;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let workflow = loader.workflow_for(RequestType::TimeOff).unwrap();
/// println!("Steps: {}", workflow.steps.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any workflow violates a structural invariant
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let workflows_path = path.join("workflows.yaml");
        let workflows = Self::load_yaml::<WorkflowsConfig>(&workflows_path)?;

        let locations_path = path.join("work_locations.yaml");
        let locations = Self::load_yaml::<WorkLocationsConfig>(&locations_path)?;

        let config = EngineConfig::new(workflows.workflows, locations.work_locations)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the workflow definition for a request type.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hrflow_engine::config::ConfigLoader;
    /// use hrflow_engine::models::RequestType;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let workflow = loader.workflow_for(RequestType::Loan)?;
    /// assert!(workflow.is_active);
    /// # Ok::<(), hrflow_engine::error::EngineError>(())
    /// ```
    pub fn workflow_for(&self, request_type: RequestType) -> EngineResult<&ApprovalWorkflow> {
        self.config.workflow_for(request_type)
    }

    /// Returns the work location with the given id, if configured.
    pub fn work_location(&self, id: &str) -> Option<&WorkLocation> {
        self.config.work_location(id)
    }
}
