//! Repository for the `user_settings` key/value table.

use sqlx::PgPool;

use crate::models::setting::UserSetting;

/// Column list for `user_settings` queries.
const COLUMNS: &str = "id, setting_key, setting_value, description, created_at, updated_at";

/// Reads and writes JSON setting documents by key.
pub struct SettingRepo;

impl SettingRepo {
    /// Find a setting by key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<UserSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_settings WHERE setting_key = $1");
        sqlx::query_as::<_, UserSetting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or overwrite the document stored under `key`.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<UserSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_settings (setting_key, setting_value) \
             VALUES ($1, $2) \
             ON CONFLICT (setting_key) DO UPDATE SET setting_value = EXCLUDED.setting_value \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSetting>(&query)
            .bind(key)
            .bind(value)
            .fetch_one(pool)
            .await
    }
}
