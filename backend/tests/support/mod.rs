#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use docshelf_backend::{
    config::Config,
    db::connection::{create_pool, DbPool},
    models::activity::NewActivity,
    router::build_router,
    state::AppState,
};

pub struct TestApp {
    pub state: AppState,
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }
}

/// File-backed SQLite in a temp dir, migrated, wrapped in the real state and
/// router. The temp dir lives as long as the returned handle.
pub async fn spawn_app() -> TestApp {
    let dir = TempDir::new().expect("create temp dir");
    let database_url = format!("sqlite:{}", dir.path().join("docshelf-test.db").display());

    let pool = create_pool(&database_url).await.expect("create pool");
    sqlx::migrate!("./migrations")
        .run(&*pool)
        .await
        .expect("run migrations");

    let state = AppState::new(pool.clone(), Config { database_url, port: 0 });

    TestApp {
        state,
        pool,
        _dir: dir,
    }
}

pub fn new_activity(action: &str, entity_type: &str, entity_id: &str) -> NewActivity {
    NewActivity {
        action: action.to_string(),
        message: format!("{} on {} {}", action, entity_type, entity_id),
        entity_type: entity_type.to_string(),
        entity_id: entity_id.to_string(),
        user_id: None,
    }
}

/// Drives one request through the router and returns the status plus the
/// body parsed as JSON (Null when the body is empty or not JSON, e.g. the
/// framework's plain-text path rejections).
pub async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = router.oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
