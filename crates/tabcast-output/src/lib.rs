//! Serialized document output for converted tables.

pub mod error;
pub mod json;

pub use error::{OutputError, Result};
pub use json::write_json_document;
