use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::activity::{Activity, NewActivity};

/// Inserts one activity row and returns the id the database assigned.
/// The `read` flag always starts at 0; only the mark-read statements below
/// ever touch it again.
pub async fn insert_activity(
    pool: &SqlitePool,
    new: &NewActivity,
    timestamp: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO activities (action, message, timestamp, read, entity_type, entity_id, user_id) \
         VALUES (?1, ?2, ?3, 0, ?4, ?5, ?6)",
    )
    .bind(&new.action)
    .bind(&new.message)
    .bind(timestamp)
    .bind(&new.entity_type)
    .bind(&new.entity_id)
    .bind(&new.user_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Most recent first; equal timestamps fall back to id so repeated calls
/// stay stable.
pub async fn list_activities(pool: &SqlitePool, limit: i64) -> Result<Vec<Activity>, sqlx::Error> {
    sqlx::query_as::<_, Activity>(
        "SELECT id, action, message, timestamp, read, entity_type, entity_id, user_id \
         FROM activities \
         ORDER BY timestamp DESC, id DESC \
         LIMIT ?1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn mark_read(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE activities SET read = 1 WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn mark_all_read(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE activities SET read = 1")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_activity(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM activities WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count_activities(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities")
        .fetch_one(pool)
        .await
}
