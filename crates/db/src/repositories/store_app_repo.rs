//! Repository for the `store_apps` table.
//!
//! Every listing query orders by `id`, which the store assigns in creation
//! order, so "first N" and "all" have a stable, explicit ordering.

use storeapps_core::search::app_matches;
use storeapps_core::types::DbId;

use crate::models::store_app::{NewStoreApp, StoreApp};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rating, people, category, date, price";

/// Provides the catalog queries and the single insert.
pub struct StoreAppRepo;

impl StoreAppRepo {
    /// Insert a validated app, returning the row with its generated id.
    ///
    /// `people` is left to its column default.
    pub async fn create(pool: &DbPool, input: &NewStoreApp) -> Result<StoreApp, sqlx::Error> {
        let query = format!(
            "INSERT INTO store_apps (name, rating, category, date, price) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(&input.name)
            .bind(input.rating)
            .bind(&input.category)
            .bind(&input.date)
            .bind(&input.price)
            .fetch_one(pool)
            .await
    }

    /// Find an app by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<StoreApp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store_apps WHERE id = ?1");
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every app, ordered by id.
    pub async fn list(pool: &DbPool) -> Result<Vec<StoreApp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store_apps ORDER BY id");
        sqlx::query_as::<_, StoreApp>(&query).fetch_all(pool).await
    }

    /// Apps whose name or category contains `normalized_term`, ordered by id.
    ///
    /// The term must already be trimmed and lower-cased. Matching runs on
    /// [`app_matches`] rather than SQLite `lower()`, which folds ASCII only.
    pub async fn search(
        pool: &DbPool,
        normalized_term: &str,
    ) -> Result<Vec<StoreApp>, sqlx::Error> {
        let mut apps = Self::list(pool).await?;
        apps.retain(|app| app_matches(&app.name, &app.category, normalized_term));
        Ok(apps)
    }

    /// The first `n` apps by id.
    pub async fn first_n(pool: &DbPool, n: u32) -> Result<Vec<StoreApp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store_apps ORDER BY id LIMIT ?1");
        sqlx::query_as::<_, StoreApp>(&query)
            .bind(i64::from(n))
            .fetch_all(pool)
            .await
    }
}
