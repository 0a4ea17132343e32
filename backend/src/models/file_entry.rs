use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata row for a file living in a folder. `folder_id = NULL` means the
/// file sits at the root of the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileEntry {
    pub id: i64,
    pub name: String,
    pub folder_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
