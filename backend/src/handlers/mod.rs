use crate::models::activity::NewActivity;
use crate::services::activity_log::ActivityLogStore;

pub mod activity_logs;
pub mod files;
pub mod folders;

/// Logging is auxiliary to the operation that just completed: a failed
/// write lands in the log output, never in the caller's response.
pub(crate) async fn log_activity(store: &ActivityLogStore, new: NewActivity) {
    if let Err(err) = store.record(new).await {
        tracing::warn!(error = %err, "failed to record activity");
    }
}
