use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::folder::Folder;

pub async fn insert_folder(
    pool: &SqlitePool,
    name: &str,
    parent_id: Option<i64>,
    now: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO folders (name, parent_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
    )
    .bind(name)
    .bind(parent_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn fetch_folder(pool: &SqlitePool, id: i64) -> Result<Option<Folder>, sqlx::Error> {
    sqlx::query_as::<_, Folder>(
        "SELECT id, name, parent_id, created_at, updated_at FROM folders WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_folders(pool: &SqlitePool) -> Result<Vec<Folder>, sqlx::Error> {
    sqlx::query_as::<_, Folder>(
        "SELECT id, name, parent_id, created_at, updated_at FROM folders ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn folder_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM folders WHERE id = ?1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// True when `candidate` is `root` itself or lives anywhere below it.
/// Used to refuse moves that would create a cycle.
pub async fn is_in_subtree(
    pool: &SqlitePool,
    root: i64,
    candidate: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "WITH RECURSIVE subtree (id) AS ( \
             SELECT id FROM folders WHERE id = ?1 \
             UNION ALL \
             SELECT f.id FROM folders f JOIN subtree s ON f.parent_id = s.id \
         ) \
         SELECT EXISTS(SELECT 1 FROM subtree WHERE id = ?2)",
    )
    .bind(root)
    .bind(candidate)
    .fetch_one(pool)
    .await
}

pub async fn rename_folder(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE folders SET name = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(name)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn reparent_folder(
    pool: &SqlitePool,
    id: i64,
    parent_id: Option<i64>,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE folders SET parent_id = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(parent_id)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Child folders and contained files go with it (ON DELETE CASCADE).
pub async fn delete_folder(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM folders WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
