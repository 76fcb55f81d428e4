//! Configuration types for the engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{ApprovalWorkflow, RequestType, WorkLocation};

/// Workflows configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowsConfig {
    /// The workflow definitions, one per request type at most.
    pub workflows: Vec<ApprovalWorkflow>,
}

/// Work locations configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkLocationsConfig {
    /// The work locations with their GOSI settings.
    pub work_locations: Vec<WorkLocation>,
}

/// The complete engine configuration loaded from YAML files.
///
/// Aggregates the validated workflow definitions (keyed by request type)
/// and work locations (keyed by id).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    workflows: HashMap<RequestType, ApprovalWorkflow>,
    work_locations: HashMap<String, WorkLocation>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts, validating
    /// every workflow's structural invariants and rejecting duplicate
    /// request types or work location ids.
    pub fn new(
        workflows: Vec<ApprovalWorkflow>,
        work_locations: Vec<WorkLocation>,
    ) -> EngineResult<Self> {
        let mut workflow_map = HashMap::with_capacity(workflows.len());
        for workflow in workflows {
            workflow.validate()?;
            if workflow_map
                .insert(workflow.request_type, workflow.clone())
                .is_some()
            {
                return Err(EngineError::InvalidWorkflow {
                    request_type: workflow.request_type.to_string(),
                    message: "more than one workflow is defined for this request type"
                        .to_string(),
                });
            }
        }

        let mut location_map = HashMap::with_capacity(work_locations.len());
        for location in work_locations {
            if location_map
                .insert(location.id.clone(), location.clone())
                .is_some()
            {
                return Err(EngineError::ConfigParseError {
                    path: "work_locations".to_string(),
                    message: format!("duplicate work location id '{}'", location.id),
                });
            }
        }

        Ok(Self {
            workflows: workflow_map,
            work_locations: location_map,
        })
    }

    /// Returns the workflow definition for a request type.
    pub fn workflow_for(&self, request_type: RequestType) -> EngineResult<&ApprovalWorkflow> {
        self.workflows
            .get(&request_type)
            .ok_or(EngineError::WorkflowNotFound {
                request_type: request_type.to_string(),
            })
    }

    /// Returns the work location with the given id, if configured.
    pub fn work_location(&self, id: &str) -> Option<&WorkLocation> {
        self.work_locations.get(id)
    }

    /// Returns all configured workflows.
    pub fn workflows(&self) -> &HashMap<RequestType, ApprovalWorkflow> {
        &self.workflows
    }

    /// Returns all configured work locations.
    pub fn work_locations(&self) -> &HashMap<String, WorkLocation> {
        &self.work_locations
    }
}
