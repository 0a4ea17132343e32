use chrono::{DateTime, Utc};

/// Returns the current UTC time. All persisted timestamps go through this
/// so the store, not its callers, decides what "now" means.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
