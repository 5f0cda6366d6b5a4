/// Process primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Field definition ids are opaque strings (UUID v4 when generated here).
pub type FieldId = String;
