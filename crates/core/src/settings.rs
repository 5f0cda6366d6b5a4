//! Console-wide settings stored as JSON documents under a setting key.

use serde::{Deserialize, Serialize};

use crate::process::ProcessStatus;

/// Setting key holding the field definition catalog.
pub const FIELD_DEFINITIONS_KEY: &str = "form_field_definitions";

/// Setting key holding the default process list filters.
pub const WORKFLOW_FILTERS_KEY: &str = "default_workflow_filters";

/// Filters pre-applied to the process list when the console opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowFilters {
    #[serde(default)]
    pub statuses: Vec<ProcessStatus>,
    #[serde(default)]
    pub categories: Vec<String>,
}
