use std::sync::Arc;

use storeapps_db::DbPool;

use crate::service::StoreAppService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog operations over the record store.
    pub store_apps: Arc<StoreAppService>,
}

impl AppState {
    /// Wire the catalog service to the given pool.
    pub fn new(pool: DbPool) -> Self {
        let store_apps = Arc::new(StoreAppService::new(Arc::new(pool)));
        Self { store_apps }
    }
}
