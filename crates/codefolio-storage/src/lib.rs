//! Codefolio Storage Layer
//!
//! SQLite-backed key/value preferences. The workbench persists exactly one
//! value here (the theme), but the table is generic.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
