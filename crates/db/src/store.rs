//! The record store port.
//!
//! The service layer depends on [`AppStore`] rather than on a pool, so it can
//! be handed any store at construction time. The SQLite pool implements it
//! by delegating to [`StoreAppRepo`].

use async_trait::async_trait;
use storeapps_core::types::DbId;

use crate::models::store_app::{NewStoreApp, StoreApp};
use crate::repositories::StoreAppRepo;
use crate::DbPool;

/// Persistence operations the catalog needs.
///
/// Listing methods return rows in ascending id order. Id generation on
/// [`AppStore::insert`] is the store's job, including under concurrent inserts.
#[async_trait]
pub trait AppStore: Send + Sync {
    async fn list(&self) -> Result<Vec<StoreApp>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<StoreApp>, sqlx::Error>;

    /// `normalized_term` is trimmed and lower-cased by the caller.
    async fn search(&self, normalized_term: &str) -> Result<Vec<StoreApp>, sqlx::Error>;

    async fn first_n(&self, n: u32) -> Result<Vec<StoreApp>, sqlx::Error>;

    async fn insert(&self, input: &NewStoreApp) -> Result<StoreApp, sqlx::Error>;

    /// Confirm the store can serve requests.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl AppStore for DbPool {
    async fn list(&self) -> Result<Vec<StoreApp>, sqlx::Error> {
        StoreAppRepo::list(self).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<StoreApp>, sqlx::Error> {
        StoreAppRepo::find_by_id(self, id).await
    }

    async fn search(&self, normalized_term: &str) -> Result<Vec<StoreApp>, sqlx::Error> {
        StoreAppRepo::search(self, normalized_term).await
    }

    async fn first_n(&self, n: u32) -> Result<Vec<StoreApp>, sqlx::Error> {
        StoreAppRepo::first_n(self, n).await
    }

    async fn insert(&self, input: &NewStoreApp) -> Result<StoreApp, sqlx::Error> {
        StoreAppRepo::create(self, input).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(self).await
    }
}
