//! Infrastructure layer
//!
//! External concerns: database access (SeaORM) and crypto (JWT, bcrypt).

pub mod crypto;
pub mod database;

pub use database::{init_database, DatabaseConfig};
