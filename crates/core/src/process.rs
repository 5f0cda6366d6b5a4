//! Processes (workflows) as seen by the form engine.
//!
//! The process record itself is owned by the backend; the engine only reads
//! it and writes its `form_configuration` slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form_fields::configuration::ProcessFormConfiguration;
use crate::types::{DbId, Timestamp};

/// Lifecycle status of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Draft,
    Active,
    Paused,
    Archived,
}

impl ProcessStatus {
    /// Stored text value.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStatus::Draft => "draft",
            ProcessStatus::Active => "active",
            ProcessStatus::Paused => "paused",
            ProcessStatus::Archived => "archived",
        }
    }

    /// Human-readable label for list badges.
    pub fn label(self) -> &'static str {
        match self {
            ProcessStatus::Draft => "Draft",
            ProcessStatus::Active => "Active",
            ProcessStatus::Paused => "Paused",
            ProcessStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProcessStatus::Draft),
            "active" => Ok(ProcessStatus::Active),
            "paused" => Ok(ProcessStatus::Paused),
            "archived" => Ok(ProcessStatus::Archived),
            other => Err(CoreError::Validation(format!(
                "Unknown process status '{other}'"
            ))),
        }
    }
}

/// A process record with its (optional) form configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    #[serde(rename = "process_id")]
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: ProcessStatus,
    pub is_active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub form_configuration: Option<ProcessFormConfiguration>,
    pub updated_at: Option<Timestamp>,
}

impl Process {
    /// The stored configuration, or an empty one when none was saved yet.
    pub fn configuration(&self) -> ProcessFormConfiguration {
        self.form_configuration.clone().unwrap_or_default()
    }

    /// Case-insensitive substring match over name, description and category.
    ///
    /// A blank query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [Some(&self.name), self.description.as_ref(), self.category.as_ref()]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}

/// Input for creating a process record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProcess {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<ProcessStatus>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewProcess {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            category: None,
            status: None,
            tags: Vec::new(),
        }
    }
}
