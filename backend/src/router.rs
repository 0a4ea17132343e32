use axum::{
    http::Method,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Builds the full application router. Extracted from `main` so integration
/// tests drive the exact same route table and middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/activity-logs",
            get(handlers::activity_logs::list_activity_logs),
        )
        .route(
            "/activity-logs/mark-all-read",
            put(handlers::activity_logs::mark_all_activities_read),
        )
        .route(
            "/activity-logs/{id}/read",
            put(handlers::activity_logs::mark_activity_read),
        )
        .route(
            "/activity-logs/{id}",
            delete(handlers::activity_logs::delete_activity_log),
        )
        .route(
            "/folders",
            get(handlers::folders::list_folders).post(handlers::folders::create_folder),
        )
        .route(
            "/folders/{id}",
            put(handlers::folders::update_folder).delete(handlers::folders::delete_folder),
        )
        .route("/folders/{id}/move", post(handlers::folders::move_folder))
        .route(
            "/files",
            get(handlers::files::list_files).post(handlers::files::create_file),
        )
        .route(
            "/files/{id}",
            put(handlers::files::update_file).delete(handlers::files::delete_file),
        )
        .route("/files/{id}/move", post(handlers::files::move_file))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
