//! PostgreSQL-backed [`ConsoleStore`].
//!
//! The field catalog lives as one JSON array under the
//! `form_field_definitions` setting; each process keeps its form
//! configuration in the `form_configuration` JSONB column.

use async_trait::async_trait;
use brainstudio_core::error::CoreError;
use brainstudio_core::form_fields::{FieldDefinition, ProcessFormConfiguration};
use brainstudio_core::process::Process;
use brainstudio_core::settings::{WorkflowFilters, FIELD_DEFINITIONS_KEY, WORKFLOW_FILTERS_KEY};
use brainstudio_core::store::ConsoleStore;
use brainstudio_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;

use crate::models::process::ProcessRow;
use crate::repositories::{ProcessRepo, SettingRepo};

/// Console store over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgConsoleStore {
    pool: PgPool,
}

impl PgConsoleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn read_setting<T>(&self, key: &str) -> Result<Option<T>, CoreError>
    where
        T: DeserializeOwned,
    {
        let Some(setting) = SettingRepo::find_by_key(&self.pool, key)
            .await
            .map_err(|e| db_error("load setting", e))?
        else {
            return Ok(None);
        };
        if setting.setting_value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(setting.setting_value)
            .map(Some)
            .map_err(|e| CoreError::Persistence(format!("Malformed setting '{key}': {e}")))
    }

    async fn write_setting<T>(&self, key: &str, value: &T) -> Result<(), CoreError>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_value(value).map_err(|e| CoreError::Internal(e.to_string()))?;
        SettingRepo::upsert(&self.pool, key, &json)
            .await
            .map_err(|e| db_error("save setting", e))?;
        Ok(())
    }
}

/// Log and convert a driver error into a persistence failure.
fn db_error(action: &str, err: sqlx::Error) -> CoreError {
    tracing::warn!(action, error = %err, "Database operation failed");
    CoreError::Persistence(format!("Failed to {action}"))
}

#[async_trait]
impl ConsoleStore for PgConsoleStore {
    async fn load_field_definitions(&self) -> Result<Vec<FieldDefinition>, CoreError> {
        Ok(self
            .read_setting::<Vec<FieldDefinition>>(FIELD_DEFINITIONS_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn save_field_definitions(
        &self,
        definitions: &[FieldDefinition],
    ) -> Result<(), CoreError> {
        self.write_setting(FIELD_DEFINITIONS_KEY, definitions).await?;
        tracing::debug!(count = definitions.len(), "Stored field catalog");
        Ok(())
    }

    async fn list_processes(&self, search: Option<&str>) -> Result<Vec<Process>, CoreError> {
        let rows = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => ProcessRepo::search(&self.pool, term).await,
            None => ProcessRepo::list(&self.pool).await,
        }
        .map_err(|e| db_error("list processes", e))?;

        rows.into_iter()
            .map(ProcessRow::into_listed_process)
            .collect()
    }

    async fn find_process(&self, id: DbId) -> Result<Option<Process>, CoreError> {
        ProcessRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| db_error("load process", e))?
            .map(Process::try_from)
            .transpose()
    }

    async fn save_form_configuration(
        &self,
        id: DbId,
        configuration: &ProcessFormConfiguration,
    ) -> Result<Process, CoreError> {
        let json =
            serde_json::to_value(configuration).map_err(|e| CoreError::Internal(e.to_string()))?;
        let row = ProcessRepo::update_form_configuration(&self.pool, id, &json)
            .await
            .map_err(|e| db_error("save form configuration", e))?
            .ok_or_else(|| CoreError::not_found("Process", id))?;
        Process::try_from(row)
    }

    async fn load_workflow_filters(&self) -> Result<WorkflowFilters, CoreError> {
        Ok(self
            .read_setting::<WorkflowFilters>(WORKFLOW_FILTERS_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn save_workflow_filters(&self, filters: &WorkflowFilters) -> Result<(), CoreError> {
        self.write_setting(WORKFLOW_FILTERS_KEY, filters).await
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| db_error("reach database", e))
    }
}
