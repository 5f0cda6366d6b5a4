//! Process models and DTOs.
//!
//! Defines the database row struct for `processes` and its conversion into
//! the core [`Process`] the form engine works with.

use brainstudio_core::error::CoreError;
use brainstudio_core::form_fields::ProcessFormConfiguration;
use brainstudio_core::process::{Process, ProcessStatus};
use brainstudio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A process row from the `processes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProcessRow {
    pub process_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: String,
    pub is_active: bool,
    pub tags: Vec<String>,
    /// Raw JSON; decoded by [`ProcessRow::into_listed_process`] or `TryFrom`.
    pub form_configuration: Option<serde_json::Value>,
    pub version: i32,
    pub execution_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProcessRow {
    /// Conversion used by listings. A malformed configuration is logged and
    /// dropped so the remaining rows still load.
    pub fn into_listed_process(mut self) -> Result<Process, CoreError> {
        let form_configuration =
            parse_configuration(self.process_id, self.form_configuration.take()).unwrap_or_else(
                |err| {
                    tracing::warn!(
                        process_id = self.process_id,
                        error = %err,
                        "Ignoring malformed form configuration",
                    );
                    None
                },
            );
        self.into_process(form_configuration)
    }

    fn into_process(
        self,
        form_configuration: Option<ProcessFormConfiguration>,
    ) -> Result<Process, CoreError> {
        let status: ProcessStatus = self.status.parse()?;
        Ok(Process {
            id: self.process_id,
            name: self.name,
            description: self.description,
            category: self.category,
            status,
            is_active: self.is_active,
            tags: self.tags,
            form_configuration,
            updated_at: Some(self.updated_at),
        })
    }
}

/// Strict conversion: a malformed configuration is a persistence error.
impl TryFrom<ProcessRow> for Process {
    type Error = CoreError;

    fn try_from(mut row: ProcessRow) -> Result<Self, Self::Error> {
        let form_configuration =
            parse_configuration(row.process_id, row.form_configuration.take())?;
        row.into_process(form_configuration)
    }
}

fn parse_configuration(
    process_id: DbId,
    value: Option<serde_json::Value>,
) -> Result<Option<ProcessFormConfiguration>, CoreError> {
    value
        .filter(|value| !value.is_null())
        .map(serde_json::from_value::<ProcessFormConfiguration>)
        .transpose()
        .map_err(|err| {
            CoreError::Persistence(format!(
                "Malformed form configuration on process {process_id}: {err}"
            ))
        })
}
