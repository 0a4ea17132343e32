use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::file_entry::FileEntry;

pub async fn insert_file(
    pool: &SqlitePool,
    name: &str,
    folder_id: Option<i64>,
    now: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO files (name, folder_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
    )
    .bind(name)
    .bind(folder_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn fetch_file(pool: &SqlitePool, id: i64) -> Result<Option<FileEntry>, sqlx::Error> {
    sqlx::query_as::<_, FileEntry>(
        "SELECT id, name, folder_id, created_at, updated_at FROM files WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Optional case-insensitive substring match on the file name.
pub async fn list_files(
    pool: &SqlitePool,
    search: Option<&str>,
) -> Result<Vec<FileEntry>, sqlx::Error> {
    match search {
        Some(term) => {
            sqlx::query_as::<_, FileEntry>(
                "SELECT id, name, folder_id, created_at, updated_at FROM files \
                 WHERE name LIKE '%' || ?1 || '%' \
                 ORDER BY name ASC, id ASC",
            )
            .bind(term)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, FileEntry>(
                "SELECT id, name, folder_id, created_at, updated_at FROM files \
                 ORDER BY name ASC, id ASC",
            )
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn rename_file(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE files SET name = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(name)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn move_file(
    pool: &SqlitePool,
    id: i64,
    folder_id: Option<i64>,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE files SET folder_id = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(folder_id)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_file(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM files WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
