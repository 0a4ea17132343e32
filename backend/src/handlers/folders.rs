use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::log_activity,
    models::{
        activity::{NewActivity, ACTION_CREATE, ACTION_DELETE, ACTION_MOVE, ACTION_UPDATE, ENTITY_FOLDER},
        folder::Folder,
        SuccessResponse,
    },
    repositories::folder as folder_repo,
    state::AppState,
    utils::time,
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFolderPayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RenameFolderPayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveFolderPayload {
    pub new_parent_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FolderResponse {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
        }
    }
}

pub async fn list_folders(
    State(state): State<AppState>,
) -> Result<Json<Vec<FolderResponse>>, AppError> {
    let folders = folder_repo::list_folders(&state.pool).await?;
    Ok(Json(
        folders.into_iter().map(FolderResponse::from).collect(),
    ))
}

pub async fn create_folder(
    State(state): State<AppState>,
    Json(payload): Json<CreateFolderPayload>,
) -> Result<Json<FolderResponse>, AppError> {
    payload.validate()?;

    if let Some(parent_id) = payload.parent_id {
        if !folder_repo::folder_exists(&state.pool, parent_id).await? {
            return Err(AppError::BadRequest("Parent folder does not exist".into()));
        }
    }

    let now = time::now_utc();
    let id = folder_repo::insert_folder(&state.pool, &payload.name, payload.parent_id, now).await?;

    log_activity(
        &state.store,
        NewActivity {
            action: ACTION_CREATE.into(),
            message: format!("Created new folder \"{}\"", payload.name),
            entity_type: ENTITY_FOLDER.into(),
            entity_id: id.to_string(),
            user_id: None,
        },
    )
    .await;

    Ok(Json(FolderResponse {
        id,
        name: payload.name,
        parent_id: payload.parent_id,
        created_at: now,
        updated_at: now,
    }))
}

pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RenameFolderPayload>,
) -> Result<Json<FolderResponse>, AppError> {
    payload.validate()?;

    let folder = folder_repo::fetch_folder(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Folder not found".into()))?;

    let now = time::now_utc();
    folder_repo::rename_folder(&state.pool, id, &payload.name, now).await?;

    log_activity(
        &state.store,
        NewActivity {
            action: ACTION_UPDATE.into(),
            message: format!("Updated folder \"{}\"", payload.name),
            entity_type: ENTITY_FOLDER.into(),
            entity_id: id.to_string(),
            user_id: None,
        },
    )
    .await;

    Ok(Json(FolderResponse {
        id,
        name: payload.name,
        parent_id: folder.parent_id,
        created_at: folder.created_at,
        updated_at: now,
    }))
}

pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    if folder_repo::fetch_folder(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound("Folder not found".into()));
    }

    folder_repo::delete_folder(&state.pool, id).await?;

    log_activity(
        &state.store,
        NewActivity {
            action: ACTION_DELETE.into(),
            message: "Deleted folder".into(),
            entity_type: ENTITY_FOLDER.into(),
            entity_id: id.to_string(),
            user_id: None,
        },
    )
    .await;

    Ok(Json(SuccessResponse::ok()))
}

pub async fn move_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MoveFolderPayload>,
) -> Result<Json<FolderResponse>, AppError> {
    let folder = folder_repo::fetch_folder(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Folder not found".into()))?;

    if let Some(new_parent_id) = payload.new_parent_id {
        if !folder_repo::folder_exists(&state.pool, new_parent_id).await? {
            return Err(AppError::BadRequest("Target folder does not exist".into()));
        }
        if folder_repo::is_in_subtree(&state.pool, id, new_parent_id).await? {
            return Err(AppError::BadRequest(
                "Cannot move a folder into its own subtree".into(),
            ));
        }
    }

    let now = time::now_utc();
    folder_repo::reparent_folder(&state.pool, id, payload.new_parent_id, now).await?;

    log_activity(
        &state.store,
        NewActivity {
            action: ACTION_MOVE.into(),
            message: "Moved folder to new location".into(),
            entity_type: ENTITY_FOLDER.into(),
            entity_id: id.to_string(),
            user_id: None,
        },
    )
    .await;

    Ok(Json(FolderResponse {
        id,
        name: folder.name,
        parent_id: payload.new_parent_id,
        created_at: folder.created_at,
        updated_at: now,
    }))
}
