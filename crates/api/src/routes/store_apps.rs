//! Route definitions for the store app catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::store_apps;
use crate::state::AppState;

/// Path the catalog is mounted at; also the base of `Location` headers.
pub const RESOURCE_ROOT: &str = "/api/StoreApps";

/// Routes mounted at [`RESOURCE_ROOT`].
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /Search      -> search (?SearchTerm=)
/// GET    /FirstTen    -> first_ten
/// GET    /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(store_apps::list).post(store_apps::create))
        .route("/Search", get(store_apps::search))
        .route("/FirstTen", get(store_apps::first_ten))
        .route("/{id}", get(store_apps::get_by_id))
}
