//! SQL repositories, one per table.

pub mod store_app_repo;

pub use store_app_repo::StoreAppRepo;
