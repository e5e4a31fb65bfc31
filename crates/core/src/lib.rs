//! Store apps domain core.
//!
//! Holds the pieces that carry no I/O: the domain error type, id aliases,
//! search term handling and the field validation helpers shared by the
//! persistence and HTTP layers.

pub mod error;
pub mod search;
pub mod types;
pub mod validation;
