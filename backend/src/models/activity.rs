use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Action tags used by the in-tree callers. The store itself accepts any
/// string, so new actions don't require a schema change.
pub const ACTION_CREATE: &str = "CREATE";
pub const ACTION_UPDATE: &str = "UPDATE";
pub const ACTION_DELETE: &str = "DELETE";
pub const ACTION_MOVE: &str = "MOVE";

pub const ENTITY_FOLDER: &str = "folder";
pub const ENTITY_FILE: &str = "file";

/// One immutable audit record of an action performed on an entity.
///
/// `id` and `timestamp` are assigned by the store at insert time; `read`
/// starts false and only ever transitions to true.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: i64,
    pub action: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub entity_type: String,
    pub entity_id: String,
    pub user_id: Option<String>,
}

/// Caller-supplied fields of an activity about to be recorded.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub action: String,
    pub message: String,
    pub entity_type: String,
    pub entity_id: String,
    pub user_id: Option<String>,
}
