//! The activity log store: the one component in this service that owns
//! persistent state. Everything else calls in through [`ActivityLogStore`]
//! after finishing its own work.

use thiserror::Error;

use crate::db::connection::DbPool;
use crate::models::activity::{Activity, NewActivity};
use crate::repositories::activity as activity_repo;
use crate::utils::time;

/// The persistence layer could not complete a statement. Callers get the
/// raw driver error; no retries happen in here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("activity storage failed: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Handle over the `activities` table. Cheap to clone; constructed once at
/// startup and handed to the HTTP layer through `AppState`.
///
/// Every operation checks a connection out of the pool for exactly one
/// statement and returns it on every exit path.
#[derive(Debug, Clone)]
pub struct ActivityLogStore {
    pool: DbPool,
}

impl ActivityLogStore {
    /// Limit applied when a caller doesn't ask for a specific one.
    pub const DEFAULT_LIMIT: i64 = 50;

    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Persists one activity and returns the stored snapshot.
    ///
    /// The id comes from the database (assigned once, never reused) and the
    /// timestamp is stamped here, never taken from the caller. The row is
    /// committed before this returns: a later `list` on any task sees it.
    pub async fn record(&self, new: NewActivity) -> Result<Activity, StoreError> {
        let timestamp = time::now_utc();
        let id = activity_repo::insert_activity(&self.pool, &new, timestamp).await?;

        Ok(Activity {
            id,
            action: new.action,
            message: new.message,
            timestamp,
            read: false,
            entity_type: new.entity_type,
            entity_id: new.entity_id,
            user_id: new.user_id,
        })
    }

    /// Up to `limit` activities, newest first. A non-positive limit yields
    /// an empty list without touching storage.
    pub async fn list(&self, limit: i64) -> Result<Vec<Activity>, StoreError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        Ok(activity_repo::list_activities(&self.pool, limit).await?)
    }

    pub async fn list_recent(&self) -> Result<Vec<Activity>, StoreError> {
        self.list(Self::DEFAULT_LIMIT).await
    }

    /// Flags one activity as read. Unknown ids are a no-op that still
    /// reports success.
    pub async fn mark_read(&self, id: i64) -> Result<bool, StoreError> {
        activity_repo::mark_read(&self.pool, id).await?;
        Ok(true)
    }

    /// Flags every activity as read, including ones already read.
    pub async fn mark_all_read(&self) -> Result<bool, StoreError> {
        activity_repo::mark_all_read(&self.pool).await?;
        Ok(true)
    }

    /// Removes one activity. Unknown ids are a no-op that still reports
    /// success, mirroring `mark_read`.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        activity_repo::delete_activity(&self.pool, id).await?;
        Ok(true)
    }
}
