//! In-process [`ConsoleStore`] used by tests and local demos.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::ConsoleStore;
use crate::error::CoreError;
use crate::form_fields::configuration::ProcessFormConfiguration;
use crate::form_fields::definition::FieldDefinition;
use crate::process::{NewProcess, Process, ProcessStatus};
use crate::settings::WorkflowFilters;
use crate::types::DbId;

#[derive(Debug, Default)]
struct MemoryState {
    definitions: Vec<FieldDefinition>,
    processes: BTreeMap<DbId, Process>,
    filters: Option<WorkflowFilters>,
    last_id: DbId,
}

/// Keeps every document in memory. Can be switched to "unavailable" so
/// callers can exercise their failure paths.
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Start with a pre-populated field catalog.
    pub fn with_definitions(definitions: Vec<FieldDefinition>) -> Self {
        let store = Self::new();
        store.state().definitions = definitions;
        store
    }

    /// Insert a process record and return it with its assigned id.
    pub fn insert_process(&self, input: NewProcess) -> Process {
        let mut state = self.state();
        state.last_id += 1;
        let process = Process {
            id: state.last_id,
            name: input.name,
            description: input.description,
            category: input.category,
            status: input.status.unwrap_or(ProcessStatus::Draft),
            is_active: true,
            tags: input.tags,
            form_configuration: None,
            updated_at: Some(chrono::Utc::now()),
        };
        state.processes.insert(process.id, process.clone());
        process
    }

    /// Make every subsequent call fail (`false`) or succeed again (`true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_available(&self) -> Result<(), CoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CoreError::Persistence("store unavailable".to_string()))
        }
    }
}

#[async_trait]
impl ConsoleStore for MemoryStore {
    async fn load_field_definitions(&self) -> Result<Vec<FieldDefinition>, CoreError> {
        self.ensure_available()?;
        Ok(self.state().definitions.clone())
    }

    async fn save_field_definitions(
        &self,
        definitions: &[FieldDefinition],
    ) -> Result<(), CoreError> {
        self.ensure_available()?;
        self.state().definitions = definitions.to_vec();
        Ok(())
    }

    async fn list_processes(&self, search: Option<&str>) -> Result<Vec<Process>, CoreError> {
        self.ensure_available()?;
        let query = search.unwrap_or_default();
        Ok(self
            .state()
            .processes
            .values()
            .filter(|p| p.matches_search(query))
            .cloned()
            .collect())
    }

    async fn find_process(&self, id: DbId) -> Result<Option<Process>, CoreError> {
        self.ensure_available()?;
        Ok(self.state().processes.get(&id).cloned())
    }

    async fn save_form_configuration(
        &self,
        id: DbId,
        configuration: &ProcessFormConfiguration,
    ) -> Result<Process, CoreError> {
        self.ensure_available()?;
        let mut state = self.state();
        let process = state
            .processes
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found("Process", id))?;
        process.form_configuration = Some(configuration.clone());
        process.updated_at = Some(chrono::Utc::now());
        Ok(process.clone())
    }

    async fn load_workflow_filters(&self) -> Result<WorkflowFilters, CoreError> {
        self.ensure_available()?;
        Ok(self.state().filters.clone().unwrap_or_default())
    }

    async fn save_workflow_filters(&self, filters: &WorkflowFilters) -> Result<(), CoreError> {
        self.ensure_available()?;
        self.state().filters = Some(filters.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        self.ensure_available()
    }
}
