pub mod health;
pub mod store_apps;
