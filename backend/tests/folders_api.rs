use axum::http::StatusCode;
use serde_json::json;

#[path = "support/mod.rs"]
mod support;

async fn create_folder(app: &support::TestApp, name: &str, parent_id: Option<i64>) -> i64 {
    let (status, body) = support::send(
        app.router(),
        "POST",
        "/folders",
        Some(json!({ "name": name, "parent_id": parent_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().expect("folder id")
}

#[tokio::test]
async fn create_folder_returns_row_and_logs_create() {
    let app = support::spawn_app().await;

    let (status, body) = support::send(
        app.router(),
        "POST",
        "/folders",
        Some(json!({ "name": "Reports" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Reports");
    assert!(body["parent_id"].is_null());
    let id = body["id"].as_i64().expect("folder id");

    let (_, logs) = support::send(app.router(), "GET", "/activity-logs", None).await;
    let first = &logs[0];
    assert_eq!(first["action"], "CREATE");
    assert_eq!(first["entityType"], "folder");
    assert_eq!(first["entityId"], id.to_string());
    assert_eq!(first["message"], "Created new folder \"Reports\"");
    assert_eq!(first["read"], false);
}

#[tokio::test]
async fn create_folder_with_unknown_parent_is_rejected() {
    let app = support::spawn_app().await;

    let (status, body) = support::send(
        app.router(),
        "POST",
        "/folders",
        Some(json!({ "name": "Orphan", "parent_id": 999 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    // Nothing was created, nothing was logged.
    let (_, logs) = support::send(app.router(), "GET", "/activity-logs", None).await;
    assert!(logs.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn create_folder_with_empty_name_is_rejected() {
    let app = support::spawn_app().await;

    let (status, body) = support::send(
        app.router(),
        "POST",
        "/folders",
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn rename_folder_logs_update() {
    let app = support::spawn_app().await;
    let id = create_folder(&app, "Drafts", None).await;

    let uri = format!("/folders/{}", id);
    let (status, body) = support::send(
        app.router(),
        "PUT",
        &uri,
        Some(json!({ "name": "Archive" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Archive");

    let (_, logs) = support::send(app.router(), "GET", "/activity-logs", None).await;
    let first = &logs[0];
    assert_eq!(first["action"], "UPDATE");
    assert_eq!(first["entityType"], "folder");
    assert_eq!(first["message"], "Updated folder \"Archive\"");
}

#[tokio::test]
async fn rename_missing_folder_is_not_found() {
    let app = support::spawn_app().await;

    let (status, body) = support::send(
        app.router(),
        "PUT",
        "/folders/999",
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn move_folder_logs_move() {
    let app = support::spawn_app().await;
    let parent = create_folder(&app, "Projects", None).await;
    let child = create_folder(&app, "2026", None).await;

    let uri = format!("/folders/{}/move", child);
    let (status, body) = support::send(
        app.router(),
        "POST",
        &uri,
        Some(json!({ "new_parent_id": parent })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["parent_id"], parent);

    let (_, logs) = support::send(app.router(), "GET", "/activity-logs", None).await;
    let first = &logs[0];
    assert_eq!(first["action"], "MOVE");
    assert_eq!(first["entityType"], "folder");
    assert_eq!(first["entityId"], child.to_string());
    assert_eq!(first["message"], "Moved folder to new location");
}

#[tokio::test]
async fn move_folder_to_root_clears_parent() {
    let app = support::spawn_app().await;
    let parent = create_folder(&app, "Projects", None).await;
    let child = create_folder(&app, "2026", Some(parent)).await;

    let uri = format!("/folders/{}/move", child);
    let (status, body) = support::send(
        app.router(),
        "POST",
        &uri,
        Some(json!({ "new_parent_id": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["parent_id"].is_null());
}

#[tokio::test]
async fn move_folder_into_own_subtree_is_rejected() {
    let app = support::spawn_app().await;
    let root = create_folder(&app, "Root", None).await;
    let nested = create_folder(&app, "Nested", Some(root)).await;

    let uri = format!("/folders/{}/move", root);
    let (status, _) = support::send(
        app.router(),
        "POST",
        &uri,
        Some(json!({ "new_parent_id": nested })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = support::send(
        app.router(),
        "POST",
        &uri,
        Some(json!({ "new_parent_id": root })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_folder_cascades_and_logs() {
    let app = support::spawn_app().await;
    let root = create_folder(&app, "Root", None).await;
    let nested = create_folder(&app, "Nested", Some(root)).await;

    let (status, _) = support::send(
        app.router(),
        "POST",
        "/files",
        Some(json!({ "name": "report.pdf", "folder_id": nested })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/folders/{}", root);
    let (status, body) = support::send(app.router(), "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, folders) = support::send(app.router(), "GET", "/folders", None).await;
    assert!(folders.as_array().expect("array").is_empty());

    let (_, files) = support::send(app.router(), "GET", "/files", None).await;
    assert!(files.as_array().expect("array").is_empty());

    let (_, logs) = support::send(app.router(), "GET", "/activity-logs", None).await;
    let first = &logs[0];
    assert_eq!(first["action"], "DELETE");
    assert_eq!(first["entityType"], "folder");
    assert_eq!(first["entityId"], root.to_string());
    assert_eq!(first["message"], "Deleted folder");
}

#[tokio::test]
async fn delete_missing_folder_is_not_found() {
    let app = support::spawn_app().await;

    let (status, _) = support::send(app.router(), "DELETE", "/folders/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_folders_returns_all_rows() {
    let app = support::spawn_app().await;
    let a = create_folder(&app, "A", None).await;
    let b = create_folder(&app, "B", Some(a)).await;

    let (status, body) = support::send(app.router(), "GET", "/folders", None).await;
    assert_eq!(status, StatusCode::OK);

    let folders = body.as_array().expect("array");
    assert_eq!(folders.len(), 2);
    assert_eq!(folders[0]["id"], a);
    assert_eq!(folders[1]["id"], b);
    assert_eq!(folders[1]["parent_id"], a);
}
