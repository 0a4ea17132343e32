use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::{activity::Activity, SuccessResponse},
    state::AppState,
};

/// Wire shape of one activity. Field names are camelCase on the wire;
/// `userId` is serialized as an explicit null when absent.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: i64,
    pub action: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub entity_type: String,
    pub entity_id: String,
    pub user_id: Option<String>,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            action: activity.action,
            message: activity.message,
            timestamp: activity.timestamp,
            read: activity.read,
            entity_type: activity.entity_type,
            entity_id: activity.entity_id,
            user_id: activity.user_id,
        }
    }
}

pub async fn list_activity_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityResponse>>, AppError> {
    let activities = state.store.list_recent().await?;
    Ok(Json(
        activities
            .into_iter()
            .map(ActivityResponse::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn mark_activity_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    let success = state.store.mark_read(id).await?;
    Ok(Json(SuccessResponse { success }))
}

pub async fn mark_all_activities_read(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, AppError> {
    let success = state.store.mark_all_read().await?;
    Ok(Json(SuccessResponse { success }))
}

pub async fn delete_activity_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    let success = state.store.delete(id).await?;
    Ok(Json(SuccessResponse { success }))
}
