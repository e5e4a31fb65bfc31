pub mod store_apps;
