//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` summary struct, the only shape handed to clients
//! - A `Deserialize` + `Validate` create DTO for inserts

pub mod store_app;
