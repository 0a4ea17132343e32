//! Data models shared across database access and API handlers.

use serde::{Deserialize, Serialize};

/// Body returned by mutation endpoints that only report completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

pub mod activity;
pub mod file_entry;
pub mod folder;
