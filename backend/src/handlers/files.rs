use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::log_activity,
    models::{
        activity::{NewActivity, ACTION_CREATE, ACTION_DELETE, ACTION_MOVE, ACTION_UPDATE, ENTITY_FILE},
        file_entry::FileEntry,
        SuccessResponse,
    },
    repositories::{file_entry as file_repo, folder as folder_repo},
    state::AppState,
    utils::time,
};

#[derive(Debug, Deserialize)]
pub struct FileListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFilePayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub folder_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RenameFilePayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveFilePayload {
    pub folder_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileResponse {
    pub id: i64,
    pub name: String,
    pub folder_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FileEntry> for FileResponse {
    fn from(file: FileEntry) -> Self {
        Self {
            id: file.id,
            name: file.name,
            folder_id: file.folder_id,
            created_at: file.created_at,
            updated_at: file.updated_at,
        }
    }
}

pub async fn list_files(
    State(state): State<AppState>,
    Query(query): Query<FileListQuery>,
) -> Result<Json<Vec<FileResponse>>, AppError> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());
    let files = file_repo::list_files(&state.pool, search).await?;
    Ok(Json(files.into_iter().map(FileResponse::from).collect()))
}

pub async fn create_file(
    State(state): State<AppState>,
    Json(payload): Json<CreateFilePayload>,
) -> Result<Json<FileResponse>, AppError> {
    payload.validate()?;

    if let Some(folder_id) = payload.folder_id {
        if !folder_repo::folder_exists(&state.pool, folder_id).await? {
            return Err(AppError::BadRequest("Folder does not exist".into()));
        }
    }

    let now = time::now_utc();
    let id = file_repo::insert_file(&state.pool, &payload.name, payload.folder_id, now).await?;

    log_activity(
        &state.store,
        NewActivity {
            action: ACTION_CREATE.into(),
            message: format!("Created new file \"{}\"", payload.name),
            entity_type: ENTITY_FILE.into(),
            entity_id: id.to_string(),
            user_id: None,
        },
    )
    .await;

    Ok(Json(FileResponse {
        id,
        name: payload.name,
        folder_id: payload.folder_id,
        created_at: now,
        updated_at: now,
    }))
}

pub async fn update_file(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RenameFilePayload>,
) -> Result<Json<FileResponse>, AppError> {
    payload.validate()?;

    let file = file_repo::fetch_file(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".into()))?;

    let now = time::now_utc();
    file_repo::rename_file(&state.pool, id, &payload.name, now).await?;

    log_activity(
        &state.store,
        NewActivity {
            action: ACTION_UPDATE.into(),
            message: format!("Updated file \"{}\"", payload.name),
            entity_type: ENTITY_FILE.into(),
            entity_id: id.to_string(),
            user_id: None,
        },
    )
    .await;

    Ok(Json(FileResponse {
        id,
        name: payload.name,
        folder_id: file.folder_id,
        created_at: file.created_at,
        updated_at: now,
    }))
}

pub async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    if file_repo::fetch_file(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound("File not found".into()));
    }

    file_repo::delete_file(&state.pool, id).await?;

    log_activity(
        &state.store,
        NewActivity {
            action: ACTION_DELETE.into(),
            message: "Deleted file".into(),
            entity_type: ENTITY_FILE.into(),
            entity_id: id.to_string(),
            user_id: None,
        },
    )
    .await;

    Ok(Json(SuccessResponse::ok()))
}

pub async fn move_file(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MoveFilePayload>,
) -> Result<Json<FileResponse>, AppError> {
    let file = file_repo::fetch_file(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".into()))?;

    if let Some(folder_id) = payload.folder_id {
        if !folder_repo::folder_exists(&state.pool, folder_id).await? {
            return Err(AppError::BadRequest("Target folder does not exist".into()));
        }
    }

    let now = time::now_utc();
    file_repo::move_file(&state.pool, id, payload.folder_id, now).await?;

    log_activity(
        &state.store,
        NewActivity {
            action: ACTION_MOVE.into(),
            message: "Moved file to new location".into(),
            entity_type: ENTITY_FILE.into(),
            entity_id: id.to_string(),
            user_id: None,
        },
    )
    .await;

    Ok(Json(FileResponse {
        id,
        name: file.name,
        folder_id: payload.folder_id,
        created_at: file.created_at,
        updated_at: now,
    }))
}
