//! Repository for the `processes` table.

use brainstudio_core::process::NewProcess;
use brainstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::process::ProcessRow;

/// Column list for `processes` queries.
const COLUMNS: &str = "process_id, name, description, category, status, is_active, tags, \
    form_configuration, version, execution_count, created_at, updated_at";

/// Provides CRUD operations for processes.
pub struct ProcessRepo;

impl ProcessRepo {
    /// Insert a new process, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProcess) -> Result<ProcessRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO processes (name, description, category, status, tags) \
             VALUES ($1, $2, $3, COALESCE($4, 'draft'), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProcessRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.status.map(|s| s.as_str()))
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Find a process by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProcessRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes WHERE process_id = $1");
        sqlx::query_as::<_, ProcessRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all processes ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProcessRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes ORDER BY process_id");
        sqlx::query_as::<_, ProcessRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over name, description and category.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<ProcessRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM processes \
             WHERE name ILIKE $1 OR description ILIKE $1 OR category ILIKE $1 \
             ORDER BY process_id"
        );
        sqlx::query_as::<_, ProcessRow>(&query)
            .bind(format!("%{}%", escape_like(term)))
            .fetch_all(pool)
            .await
    }

    /// Overwrite the process's `form_configuration` document.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update_form_configuration(
        pool: &PgPool,
        id: DbId,
        configuration: &serde_json::Value,
    ) -> Result<Option<ProcessRow>, sqlx::Error> {
        let query = format!(
            "UPDATE processes SET form_configuration = $2 \
             WHERE process_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProcessRow>(&query)
            .bind(id)
            .bind(configuration)
            .fetch_optional(pool)
            .await
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside ILIKE.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
