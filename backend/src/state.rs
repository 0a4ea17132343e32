use crate::{config::Config, db::connection::DbPool, services::activity_log::ActivityLogStore};

/// Shared state handed to every handler. The activity store is constructed
/// exactly once here and injected; nothing else may write to its table.
#[derive(Clone)]
pub struct AppState {
    pub store: ActivityLogStore,
    pub pool: DbPool,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            store: ActivityLogStore::new(pool.clone()),
            pool,
            config,
        }
    }
}
