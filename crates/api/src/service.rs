//! Store app catalog operations.
//!
//! [`StoreAppService`] holds nothing but the record store it was built with.
//! Every record it returns has been projected to [`StoreAppSummary`].

use std::sync::Arc;

use storeapps_core::error::CoreError;
use storeapps_core::search::normalize_term;
use storeapps_core::types::DbId;
use storeapps_db::models::store_app::{CreateStoreApp, StoreApp, StoreAppSummary};
use storeapps_db::store::AppStore;

use crate::error::AppResult;

/// Resource service for the store app catalog.
pub struct StoreAppService {
    store: Arc<dyn AppStore>,
}

impl StoreAppService {
    /// Build a service over the given store.
    pub fn new(store: Arc<dyn AppStore>) -> Self {
        Self { store }
    }

    /// Every app, ordered by id. An empty store yields an empty list.
    pub async fn list(&self) -> AppResult<Vec<StoreAppSummary>> {
        let apps = self.store.list().await?;
        tracing::debug!(count = apps.len(), "Listed store apps");
        Ok(project(apps))
    }

    /// One app by id, or `CoreError::NotFound`.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<StoreAppSummary> {
        let app = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "StoreApp",
                id,
            })?;
        Ok(app.into())
    }

    /// Apps whose name or category contains `term`, ignoring case and
    /// surrounding whitespace. No match is an empty list, not an error.
    pub async fn search(&self, term: &str) -> AppResult<Vec<StoreAppSummary>> {
        let normalized = normalize_term(term);
        let apps = self.store.search(&normalized).await?;
        tracing::debug!(term = %normalized, count = apps.len(), "Searched store apps");
        Ok(project(apps))
    }

    /// The first `n` apps by id; fewer when the store holds fewer.
    pub async fn top_n(&self, n: u32) -> AppResult<Vec<StoreAppSummary>> {
        let apps = self.store.first_n(n).await?;
        Ok(project(apps))
    }

    /// Validate and persist a new app.
    ///
    /// Validation runs before the store is touched, so a rejected candidate
    /// leaves no trace. The returned summary carries the store-assigned id.
    pub async fn create(&self, input: CreateStoreApp) -> AppResult<StoreAppSummary> {
        let new_app = input.validated()?;
        let app = self.store.insert(&new_app).await?;
        tracing::info!(id = app.id, name = %app.name, "Store app created");
        Ok(app.into())
    }

    /// Whether the record store answers. Failures are logged, not returned.
    pub async fn store_available(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Record store unavailable");
                false
            }
        }
    }
}

fn project(apps: Vec<StoreApp>) -> Vec<StoreAppSummary> {
    apps.into_iter().map(StoreAppSummary::from).collect()
}
